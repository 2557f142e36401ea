pub mod contacts;
pub mod game;
pub mod shapes;
