use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("Type mismatch: expected {expected} got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("IO Error:{0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before the area was guessed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, GeometryError>;
