pub mod coord;
pub mod error;

pub use coord::Coordinate;
pub use error::PolylineError;
