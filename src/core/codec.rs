use crate::core::scalar::{decode_scalar, encode_scalar};
use crate::util::coord::Coordinate;
use crate::util::error::PolylineError;
use geo_types::Point;

fn precision_factor(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// Scales degrees to an integer, rounding half away from zero.
fn scale(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}

/// Encodes an ordered run of (longitude, latitude) coordinates into a
/// polyline string.
///
/// # Process
///
/// 1. Scales each axis by `10^precision` and rounds to an integer
/// 2. Takes the delta against the previous scaled value on the same axis
/// 3. Appends the scalar encoding of each delta, latitude first
///
/// Coordinates are not range-checked; values outside [-180, 180] and
/// [-90, 90] encode like any others. An empty slice yields an empty string.
///
/// # Example
/// ```
/// use polyline_rs::{DEFAULT_PRECISION, encode_coordinates};
///
/// let encoded = encode_coordinates(&[(-120.2, 38.5)], DEFAULT_PRECISION);
/// assert_eq!(encoded, "_p~iF~ps|U");
/// ```
pub fn encode_coordinates<C: Coordinate>(coords: &[C], precision: u32) -> String {
    let factor = precision_factor(precision);
    let mut encoded = String::with_capacity(coords.len() * 10);
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for coord in coords {
        let lat = scale(coord.lat(), factor);
        let lon = scale(coord.lon(), factor);

        // wire order within each pair is latitude first
        encode_scalar(lat - prev_lat, &mut encoded);
        encode_scalar(lon - prev_lon, &mut encoded);

        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}

/// Decodes a polyline string back into (longitude, latitude) points.
///
/// The inverse of [`encode_coordinates`]: reads one latitude and one
/// longitude delta per point, accumulates them, and unscales by
/// `10^precision`. The precision must match the one used to encode, or the
/// result is silently wrong by the corresponding power of ten.
///
/// An empty string yields an empty vec.
///
/// # Example
/// ```
/// use polyline_rs::{DEFAULT_PRECISION, decode_polyline};
///
/// # fn main() -> Result<(), polyline_rs::PolylineError> {
/// let points = decode_polyline("_p~iF~ps|U", DEFAULT_PRECISION)?;
/// assert_eq!(points.len(), 1);
/// assert!((points[0].x() - (-120.2)).abs() < 1e-9);
/// assert!((points[0].y() - 38.5).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PolylineError::UnpairedCoordinate`] - input ended after a latitude delta
/// - [`PolylineError::TruncatedScalar`] - input ended mid chunk sequence
/// - [`PolylineError::InvalidCharacter`] - byte outside the encoding range
/// - [`PolylineError::ScalarOverflow`] - chunk run too long for a 64-bit delta
pub fn decode_polyline(polyline: &str, precision: u32) -> Result<Vec<Point<f64>>, PolylineError> {
    let bytes = polyline.as_bytes();
    let factor = precision_factor(precision);
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut cursor = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while cursor < bytes.len() {
        lat += decode_scalar(bytes, &mut cursor)?;
        if cursor >= bytes.len() {
            return Err(PolylineError::UnpairedCoordinate(cursor));
        }
        lon += decode_scalar(bytes, &mut cursor)?;

        points.push(Point::new(lon as f64 / factor, lat as f64 / factor));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DEFAULT_PRECISION;

    // 64-point route through San Francisco
    const ROUTE_FIXTURE: &str = "i|peFh`ejVTG|@qDyAwBcD`C}BjCt@zBiI{@O~AiKeDiBmCjAyIq@_Hd@tAcI?iE`A}AkD`A}BE`CyBaEmECu@kAgG{FgE^aJoBq@{Ed@}IeHw@yCnAuFjCeEmF_AgHoEgEiCmCgKuGsFuAiG~B_LoDo@iGwFi@kCrCf@hAkH~B[|AaJk@eCtBeJ}B}IiGsBNgJYTqIUbAwCd@c@qCuB|CaE_@cGoI{EkBfA_EqHsHyHeHkBk@eFhB~@~B";

    const THREE_POINTS: [(f64, f64); 3] = [(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)];

    fn assert_close(actual: Point<f64>, expected: (f64, f64), tolerance: f64) {
        assert!(
            (actual.x() - expected.0).abs() < tolerance,
            "longitude {} != {}",
            actual.x(),
            expected.0
        );
        assert!(
            (actual.y() - expected.1).abs() < tolerance,
            "latitude {} != {}",
            actual.y(),
            expected.1
        );
    }

    #[test]
    fn test_empty_identity() -> Result<(), PolylineError> {
        let no_points: [(f64, f64); 0] = [];
        assert_eq!(encode_coordinates(&no_points, DEFAULT_PRECISION), "");
        assert!(decode_polyline("", DEFAULT_PRECISION)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_encode_single_point() {
        let encoded = encode_coordinates(&[(-120.2, 38.5)], DEFAULT_PRECISION);
        assert_eq!(encoded, "_p~iF~ps|U");
    }

    #[test]
    fn test_decode_single_point() -> Result<(), PolylineError> {
        let points = decode_polyline("_p~iF~ps|U", DEFAULT_PRECISION)?;
        assert_eq!(points.len(), 1);
        assert_close(points[0], (-120.2, 38.5), 1e-9);
        Ok(())
    }

    #[test]
    fn test_encode_route() {
        let encoded = encode_coordinates(&THREE_POINTS, DEFAULT_PRECISION);
        assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_encode_route_precision_six() {
        let encoded = encode_coordinates(&THREE_POINTS, 6);
        assert_eq!(encoded, "_izlhA~rlgdF_{geC~ywl@_kwzCn`{nI");
    }

    #[test]
    fn test_decode_route_precision_six() -> Result<(), PolylineError> {
        let points = decode_polyline("_izlhA~rlgdF_{geC~ywl@_kwzCn`{nI", 6)?;
        assert_eq!(points.len(), 3);
        for (point, expected) in points.into_iter().zip(THREE_POINTS) {
            assert_close(point, expected, 5e-7);
        }
        Ok(())
    }

    #[test]
    fn test_over_precision_rounding() {
        // Adjacent points whose scaled values land on rounding boundaries
        let points = [
            (-87.650933, 41.875332),
            (-87.650936, 41.875336),
            (-87.650942, 41.87534),
        ];
        let encoded = encode_coordinates(&points, DEFAULT_PRECISION);
        assert_eq!(encoded, "ywq~Fhi~uOA@??");
    }

    #[test]
    fn test_reencode_is_byte_identical() -> Result<(), PolylineError> {
        let encoded = "_chxEn`zvN\\\\]]";
        let points = decode_polyline(encoded, DEFAULT_PRECISION)?;
        assert_eq!(points.len(), 3);
        assert_eq!(encode_coordinates(&points, DEFAULT_PRECISION), encoded);
        Ok(())
    }

    #[test]
    fn test_route_fixture_point_count() -> Result<(), PolylineError> {
        let points = decode_polyline(ROUTE_FIXTURE, DEFAULT_PRECISION)?;
        assert_eq!(points.len(), 64);
        assert_close(points[0], (-122.41941, 37.77493), 1e-9);
        assert_close(points[63], (-122.39628, 37.823), 1e-9);
        assert_eq!(encode_coordinates(&points, DEFAULT_PRECISION), ROUTE_FIXTURE);
        Ok(())
    }

    #[test]
    fn test_roundtrip_tolerance() -> Result<(), PolylineError> {
        let route = [(-5.60342, 58.90982), (0.0, 0.00001), (13.0076, -47.59156)];
        for precision in [1, 2, 3, 4, 5, 6] {
            let tolerance = 0.5 * 10f64.powi(-(precision as i32)) + 1e-9;
            let decoded = decode_polyline(&encode_coordinates(&route, precision), precision)?;
            assert_eq!(decoded.len(), route.len());
            for (point, expected) in decoded.into_iter().zip(route) {
                assert_close(point, expected, tolerance);
            }
        }
        Ok(())
    }

    #[test]
    fn test_boundary_and_out_of_range_values() -> Result<(), PolylineError> {
        // No range validation: poles, antimeridian, and beyond all round-trip
        let route = [(-180.0, -90.0), (180.0, 90.0), (200.5, 95.25)];
        let decoded = decode_polyline(&encode_coordinates(&route, DEFAULT_PRECISION), DEFAULT_PRECISION)?;
        for (point, expected) in decoded.into_iter().zip(route) {
            assert_close(point, expected, 1e-5);
        }
        Ok(())
    }

    #[test]
    fn test_point_and_tuple_inputs_agree() {
        let tuples = THREE_POINTS;
        let points: Vec<Point<f64>> = tuples.iter().map(|&(lon, lat)| Point::new(lon, lat)).collect();

        assert_eq!(
            encode_coordinates(&tuples, DEFAULT_PRECISION),
            encode_coordinates(&points, DEFAULT_PRECISION)
        );
    }

    #[test]
    fn test_unpaired_coordinate() {
        // "_p~iF" is a complete latitude delta with no longitude following
        let result = decode_polyline("_p~iF", DEFAULT_PRECISION);
        assert_eq!(result, Err(PolylineError::UnpairedCoordinate(5)));
    }

    #[test]
    fn test_dangling_partial_scalar() {
        let result = decode_polyline("_p~iF~ps|", DEFAULT_PRECISION);
        assert_eq!(result, Err(PolylineError::TruncatedScalar(5)));
    }

    #[test]
    fn test_invalid_character_rejected() {
        let result = decode_polyline("_p~iF ~ps|U", DEFAULT_PRECISION);
        assert_eq!(result, Err(PolylineError::InvalidCharacter(' ', 5)));
    }
}
