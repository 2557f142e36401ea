use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{kind} {name:?} does not take orders")]
    NotASupplier { kind: &'static str, name: String },

    #[error("IO Error:{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContactError>;
