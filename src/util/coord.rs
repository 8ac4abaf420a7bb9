use geo_types::{Coord, Point};

pub trait Coordinate {
    fn lon(&self) -> f64;
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 { self.0 }
    fn lat(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 { self.x() }
    fn lat(&self) -> f64 { self.y() }
}

impl Coordinate for Coord<f64> {
    fn lon(&self) -> f64 { self.x }
    fn lat(&self) -> f64 { self.y }
}
