pub mod cuboid;
pub mod point;
pub mod rectangle;
pub mod shape;
pub mod square;
