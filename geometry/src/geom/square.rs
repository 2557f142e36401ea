use crate::geom::point::Point;
use crate::geom::rectangle::Rectangle;
use crate::geom::shape::Shape;

/// A square anchored at its lower-left corner.
///
/// Only the corner and the side length are stored; the upper-right corner is
/// derived on demand, so width and height always equal `sidelength`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Square {
    lowleft: Point,
    sidelength: f64,
}

impl Square {
    pub fn new(lowleft: Point, sidelength: f64) -> Self {
        Square {
            lowleft,
            sidelength,
        }
    }

    pub fn lowleft(&self) -> &Point {
        &self.lowleft
    }

    pub fn upright(&self) -> Point {
        Point::new(
            self.lowleft.x() + self.sidelength,
            self.lowleft.y() + self.sidelength,
        )
    }

    pub fn sidelength(&self) -> f64 {
        self.sidelength
    }

    /// Moves the lower-left corner, the side length is kept.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.lowleft.move_to(x, y)
    }

    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle::new(self.lowleft, self.upright())
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * self.sidelength
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.as_rectangle().area()
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::point::Point;
    use crate::geom::shape::Shape;
    use crate::geom::square::Square;

    #[test]
    fn test_area_and_perimeter() {
        let square = Square::new(Point::default(), 5.0);
        assert_eq!(square.area(), 25.0);
        assert_eq!(square.perimeter(), 20.0);
    }

    #[test]
    fn test_derived_upright() {
        let square = Square::new(Point::new(1.0, 2.0), 3.0);
        assert_eq!(square.upright(), Point::new(4.0, 5.0));
        let rect = square.as_rectangle();
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 3.0);
    }

    #[test]
    fn test_move_keeps_side() {
        let mut square = Square::new(Point::default(), 5.0);
        square.move_to(-10.0, 7.0);
        assert_eq!(square.upright(), Point::new(-5.0, 12.0));
        assert_eq!(square.area(), 25.0);
        assert_eq!(square.perimeter(), 20.0);
    }

    #[test]
    fn test_negative_side() {
        let square = Square::new(Point::default(), -2.0);
        assert_eq!(square.area(), 4.0);
        assert_eq!(square.perimeter(), -8.0);
    }
}
