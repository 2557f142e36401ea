use std::io::{self, Write};

use clap::Parser;

use geometry::error::Result;
use geometry::{Cuboid, Point, Rectangle, Shape, Square};

#[derive(Debug, Parser)]
pub struct Config {}

pub fn command(_cfg: Config) -> Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock())
}

pub(crate) fn write_report<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Testing Point")?;
    let point_1 = Point::new(3.0, 4.0);
    let point_2 = Point::new(8.0, 15.0);
    writeln!(out, "The first point is : {}", point_1)?;
    writeln!(out, "The second point is : {}", point_2)?;
    writeln!(
        out,
        "The distance between points {} and {} is: {}",
        point_1,
        point_2,
        point_1.distance_to(&point_2)
    )?;
    let point_3 = Point::new(5.0, 6.0);
    let rect_1 = Rectangle::new(point_1, point_2);
    writeln!(out, "{}", point_3.containment(&rect_1))?;

    writeln!(out, "\nTesting Rectangle")?;
    let rect_2 = Rectangle::new(Point::default(), Point::new(4.0, 4.0));
    writeln!(out, "The area of the rectangle is : {}", rect_2.area())?;

    writeln!(out, "\nTesting Square")?;
    let square = Square::new(Point::default(), 5.0);
    writeln!(out, "The area of the square is : {}", square.area())?;
    writeln!(out, "The perimeter of the square is : {}", square.perimeter())?;

    writeln!(out, "\nTesting Cuboid")?;
    let cuboid = Cuboid::new(Point::default(), Point::new(4.0, 3.0), 5.0);
    writeln!(out, "Volume of cuboid: {}", cuboid.volume())?;
    writeln!(out, "Surface area of cuboid: {}", cuboid.surface_area())?;
    Ok(())
}
