//! # polyline-rs
//!
//! A codec for the Google Encoded Polyline Algorithm Format: it compresses
//! an ordered sequence of (longitude, latitude) pairs into a compact ASCII
//! string suitable for URLs and wire payloads, and parses such strings back.
//!
//! There are currently three main entry points.
//!
//! ### 1. `Polyline` - Route Geometries
//!
//! ```
//! use polyline_rs::{DEFAULT_PRECISION, Polyline};
//!
//! # fn main() -> Result<(), polyline_rs::PolylineError> {
//! let route = Polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", DEFAULT_PRECISION)?;
//! println!("{} points", route.len());
//! let line_string = route.to_line_string();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Free Functions - Coordinate Slices
//!
//! Encode anything that yields (longitude, latitude) pairs: tuples,
//! `geo_types::Point`, or `geo_types::Coord`:
//!
//! ```
//! use polyline_rs::{DEFAULT_PRECISION, encode_coordinates};
//! use geo_types::point;
//!
//! let pts = [point! { x: -120.2, y: 38.5 }];
//! assert_eq!(encode_coordinates(&pts, DEFAULT_PRECISION), "_p~iF~ps|U");
//! ```
//!
//! ### 3. `PointShape` - Heterogeneous Input Normalization
//!
//! Accepts mixed point representations at the boundary (pairs, named
//! mappings, GeoJSON-style records), rejecting anything unrecognized:
//!
//! ```
//! use polyline_rs::{DEFAULT_PRECISION, Polyline};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), polyline_rs::PolylineError> {
//! let raw = vec![json!([-120.2, 38.5]), json!({"lon": -120.95, "lat": 40.7})];
//! let route = Polyline::from_json(&raw)?;
//! println!("{}", route.encode(DEFAULT_PRECISION));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{PointShape, Polyline};
pub use core::{
    DEFAULT_PRECISION, decode_polyline, decode_scalar, encode_coordinates, encode_scalar,
};
pub use util::{Coordinate, PolylineError};

pub use geo_types;
pub use geojson;
