use crate::util::coord::Coordinate;
use crate::util::error::PolylineError;
use geo_types::Point;
use serde::Deserialize;
use serde_json::Value;

/// A point in one of the representations accepted at the encode boundary.
///
/// Sequences may mix representations freely; every variant collapses to the
/// same (longitude, latitude) pair before the codec runs. Anything else is
/// rejected with [`PolylineError::InvalidPointShape`] rather than coerced.
///
/// # Example
///
/// ```
/// use polyline_rs::PointShape;
///
/// let mixed: Vec<PointShape> = serde_json::from_str(
///     r#"[[-120.2, 38.5], {"longitude": -120.95, "latitude": 40.7}, {"lon": -126.453, "lat": 43.252}]"#,
/// ).unwrap();
/// assert_eq!(mixed.len(), 3);
/// assert_eq!(mixed[1].to_point().y(), 40.7);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PointShape {
    /// Two-element `[longitude, latitude]` pair
    Pair(f64, f64),
    /// Mapping with `longitude`/`latitude` keys
    Named { longitude: f64, latitude: f64 },
    /// Mapping with abbreviated `lon`/`lat` keys
    Abbreviated { lon: f64, lat: f64 },
    /// GeoJSON-style record with a `coordinates` pair
    Geometry { coordinates: (f64, f64) },
}

impl PointShape {
    /// Collapses this shape to a plain (longitude, latitude) point.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon(), self.lat())
    }
}

impl Coordinate for PointShape {
    fn lon(&self) -> f64 {
        match *self {
            PointShape::Pair(lon, _) => lon,
            PointShape::Named { longitude, .. } => longitude,
            PointShape::Abbreviated { lon, .. } => lon,
            PointShape::Geometry { coordinates: (lon, _) } => lon,
        }
    }

    fn lat(&self) -> f64 {
        match *self {
            PointShape::Pair(_, lat) => lat,
            PointShape::Named { latitude, .. } => latitude,
            PointShape::Abbreviated { lat, .. } => lat,
            PointShape::Geometry { coordinates: (_, lat) } => lat,
        }
    }
}

impl From<(f64, f64)> for PointShape {
    fn from((lon, lat): (f64, f64)) -> Self {
        PointShape::Pair(lon, lat)
    }
}

impl From<Point<f64>> for PointShape {
    fn from(point: Point<f64>) -> Self {
        PointShape::Pair(point.x(), point.y())
    }
}

impl TryFrom<&Value> for PointShape {
    type Error = PolylineError;

    /// Matches one JSON element against the closed set of recognized shapes.
    fn try_from(value: &Value) -> Result<Self, PolylineError> {
        match value {
            Value::Array(_) => coordinate_pair(value)
                .map(|(lon, lat)| PointShape::Pair(lon, lat))
                .ok_or_else(|| PolylineError::InvalidPointShape(value.to_string())),
            Value::Object(map) => {
                if let (Some(longitude), Some(latitude)) =
                    (number(map.get("longitude")), number(map.get("latitude")))
                {
                    Ok(PointShape::Named { longitude, latitude })
                } else if let (Some(lon), Some(lat)) =
                    (number(map.get("lon")), number(map.get("lat")))
                {
                    Ok(PointShape::Abbreviated { lon, lat })
                } else if let Some(coordinates) = map.get("coordinates").and_then(coordinate_pair) {
                    Ok(PointShape::Geometry { coordinates })
                } else {
                    Err(PolylineError::InvalidPointShape(value.to_string()))
                }
            }
            _ => Err(PolylineError::InvalidPointShape(value.to_string())),
        }
    }
}

impl TryFrom<&geojson::Value> for PointShape {
    type Error = PolylineError;

    /// Accepts a GeoJSON `Point` geometry; every other geometry type is
    /// rejected.
    fn try_from(value: &geojson::Value) -> Result<Self, PolylineError> {
        match value {
            geojson::Value::Point(position) if position.len() >= 2 => Ok(PointShape::Geometry {
                coordinates: (position[0], position[1]),
            }),
            _ => Err(PolylineError::InvalidPointShape(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn coordinate_pair(value: &Value) -> Option<(f64, f64)> {
    match value {
        Value::Array(items) => match items.as_slice() {
            [lon, lat] => Some((lon.as_f64()?, lat.as_f64()?)),
            _ => None,
        },
        _ => None,
    }
}
