use crate::api::shape::PointShape;
use crate::core::codec::{decode_polyline, encode_coordinates};
use crate::util::error::PolylineError;
use geo_types::LineString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A route geometry as a decoded sequence of (longitude, latitude) points.
///
/// Stores plain coordinate pairs for internal processing; conversion to and
/// from the compact polyline format happens through [`Polyline::decode`] and
/// [`Polyline::encode`].
///
/// # Example
///
/// ```
/// use polyline_rs::{DEFAULT_PRECISION, Polyline};
///
/// # fn main() -> Result<(), polyline_rs::PolylineError> {
/// let route = Polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", DEFAULT_PRECISION)?;
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.encode(DEFAULT_PRECISION), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a polyline from (longitude, latitude) pairs.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a polyline string at the given precision.
    ///
    /// The precision must match the one the string was encoded with.
    ///
    /// # Errors
    ///
    /// Any of the malformed-input variants of [`PolylineError`] when the
    /// string does not form complete, well-terminated scalar pairs.
    pub fn decode(encoded: &str, precision: u32) -> Result<Self, PolylineError> {
        let points = decode_polyline(encoded, precision)?
            .into_iter()
            .map(|point| (point.x(), point.y()))
            .collect();
        Ok(Self { points })
    }

    /// Encodes this polyline at the given precision.
    pub fn encode(&self, precision: u32) -> String {
        encode_coordinates(&self.points, precision)
    }

    /// Creates a polyline from already-normalized point shapes.
    ///
    /// The shapes may mix representations within one sequence.
    pub fn from_shapes(shapes: &[PointShape]) -> Self {
        Self {
            points: shapes
                .iter()
                .map(|shape| {
                    let point = shape.to_point();
                    (point.x(), point.y())
                })
                .collect(),
        }
    }

    /// Normalizes a sequence of raw JSON values into a polyline.
    ///
    /// # Errors
    ///
    /// [`PolylineError::InvalidPointShape`] as soon as one element matches
    /// none of the recognized representations; no partial polyline is built.
    pub fn from_json(values: &[Value]) -> Result<Self, PolylineError> {
        let mut points = Vec::with_capacity(values.len());
        for value in values {
            let shape = PointShape::try_from(value)?;
            let point = shape.to_point();
            points.push((point.x(), point.y()));
        }
        Ok(Self { points })
    }

    /// Returns a reference to the (longitude, latitude) pairs.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned pairs.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the polyline contains any point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Converts this polyline to a `geo_types::LineString`.
    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::from(self.points.clone())
    }
}

impl From<&LineString<f64>> for Polyline {
    fn from(line: &LineString<f64>) -> Self {
        Self {
            points: line.coords().map(|coord| (coord.x, coord.y)).collect(),
        }
    }
}

impl From<Polyline> for LineString<f64> {
    fn from(polyline: Polyline) -> Self {
        LineString::from(polyline.points)
    }
}
