use crate::geom::point::Point;
use crate::geom::shape::Shape;

/// An axis-aligned rectangle given by its lower-left and upper-right corners.
///
/// The corners are copied in and never reordered. Every computation reads
/// the corners as they are at call time, so edits through
/// [`Rectangle::lowleft_mut`] and [`Rectangle::upright_mut`] are reflected
/// immediately.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rectangle {
    lowleft: Point,
    upright: Point,
}

impl Rectangle {
    pub fn new(lowleft: Point, upright: Point) -> Self {
        Rectangle { lowleft, upright }
    }

    pub fn lowleft(&self) -> &Point {
        &self.lowleft
    }

    pub fn upright(&self) -> &Point {
        &self.upright
    }

    pub fn lowleft_mut(&mut self) -> &mut Point {
        &mut self.lowleft
    }

    pub fn upright_mut(&mut self) -> &mut Point {
        &mut self.upright
    }

    /// Signed extent along x, negative when the corners are swapped.
    pub fn width(&self) -> f64 {
        self.upright.x() - self.lowleft.x()
    }

    /// Signed extent along y.
    pub fn height(&self) -> f64 {
        self.upright.y() - self.lowleft.y()
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.is_inside(self)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        (self.width() * self.height()).abs()
    }
}
