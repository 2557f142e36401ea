use crate::geom::point::Point;
use crate::geom::rectangle::Rectangle;
use crate::geom::shape::Shape;

/// A rectangular base extruded along a third axis by `height`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cuboid {
    base: Rectangle,
    height: f64,
}

impl Cuboid {
    pub fn new(lowleft: Point, upright: Point, height: f64) -> Self {
        Cuboid {
            base: Rectangle::new(lowleft, upright),
            height,
        }
    }

    pub fn base(&self) -> &Rectangle {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Rectangle {
        &mut self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        self.base.area() * self.height
    }

    // length and breadth are signed here, unlike the base area used by volume
    pub fn surface_area(&self) -> f64 {
        let length = self.base.upright().x() - self.base.lowleft().x();
        let breadth = self.base.upright().y() - self.base.lowleft().y();
        let base_area = length * breadth;
        let side_area = 2.0 * self.height * (length + breadth);
        2.0 * base_area + side_area
    }
}

impl Shape for Cuboid {
    fn area(&self) -> f64 {
        self.base.area()
    }
}
