pub mod error;
pub mod game;
pub mod geom;

pub use geom::cuboid::Cuboid;
pub use geom::point::Point;
pub use geom::rectangle::Rectangle;
pub use geom::shape::{Geometry, Shape};
pub use geom::square::Square;
