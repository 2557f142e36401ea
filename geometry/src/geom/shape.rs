use crate::error::{GeometryError, Result};
use crate::geom::cuboid::Cuboid;
use crate::geom::point::Point;
use crate::geom::rectangle::Rectangle;
use crate::geom::square::Square;

/// Anything with a planar area. For a cuboid this is the base area.
pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Rectangle(Rectangle),
    Square(Square),
    Cuboid(Cuboid),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Rectangle(_) => "Rectangle",
            Geometry::Square(_) => "Square",
            Geometry::Cuboid(_) => "Cuboid",
        }
    }

    pub fn as_point(&self) -> Result<&Point> {
        match self {
            Geometry::Point(p) => Ok(p),
            _ => Err(GeometryError::TypeMismatch {
                expected: "Point",
                got: self.kind().to_string(),
            }),
        }
    }

    /// The planar view of the value, `None` for a point.
    pub fn as_shape(&self) -> Option<&dyn Shape> {
        match self {
            Geometry::Point(_) => None,
            Geometry::Rectangle(r) => Some(r as &dyn Shape),
            Geometry::Square(s) => Some(s),
            Geometry::Cuboid(c) => Some(c),
        }
    }

    pub fn area(&self) -> f64 {
        self.as_shape().map(|s| s.area()).unwrap_or(0.0)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<Rectangle> for Geometry {
    fn from(value: Rectangle) -> Self {
        Geometry::Rectangle(value)
    }
}

impl From<Square> for Geometry {
    fn from(value: Square) -> Self {
        Geometry::Square(value)
    }
}

impl From<Cuboid> for Geometry {
    fn from(value: Cuboid) -> Self {
        Geometry::Cuboid(value)
    }
}
