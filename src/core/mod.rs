pub mod codec;
pub mod constants;
pub mod scalar;

pub use codec::{decode_polyline, encode_coordinates};
pub use constants::DEFAULT_PRECISION;
pub use scalar::{decode_scalar, encode_scalar};
