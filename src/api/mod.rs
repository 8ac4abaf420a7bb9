pub mod polyline;
pub mod shape;

pub use polyline::Polyline;
pub use shape::PointShape;
