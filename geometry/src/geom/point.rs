use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geom::rectangle::Rectangle;
use crate::geom::shape::Geometry;

/// A position in two-dimensional coordinates, the origin by default.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn reset(&mut self) {
        self.move_to(0.0, 0.0)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance to an arbitrary geometry value, which must be a point.
    pub fn distance_to_geometry(&self, other: &Geometry) -> Result<f64> {
        let other = other.as_point().map_err(|err| match err {
            GeometryError::TypeMismatch { got, .. } => GeometryError::TypeMismatch {
                expected: "Point as distance target",
                got,
            },
            err => err,
        })?;
        Ok(self.distance_to(other))
    }

    /// Strict containment: a point on the boundary is not inside.
    ///
    /// The corners are compared as stored, so a rectangle whose `lowleft`
    /// lies above or right of its `upright` contains nothing.
    pub fn is_inside(&self, rectangle: &Rectangle) -> bool {
        let lowleft = rectangle.lowleft();
        let upright = rectangle.upright();
        lowleft.x < self.x && self.x < upright.x && lowleft.y < self.y && self.y < upright.y
    }

    pub fn containment(&self, rectangle: &Rectangle) -> Containment {
        Containment {
            point: *self,
            inside: self.is_inside(rectangle),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Printable outcome of a containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    point: Point,
    inside: bool,
}

impl Containment {
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inside {
            write!(f, "The point {}, is inside the rectangle!", self.point)
        } else {
            write!(f, "The point {}, is not inside the rectangle!", self.point)
        }
    }
}
