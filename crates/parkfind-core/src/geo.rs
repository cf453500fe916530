//! Coordinate parsing and great-circle distance.
//!
//! Coordinates travel as `"<latitude>, <longitude>"` strings on every inbound
//! surface (query strings, CLI arguments, environment variables), so parsing
//! and bounds validation live here in one place.

use thiserror::Error;

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("expected latitude and longitude separated by a comma, e.g. '55.7558, 37.6173'; found {found} part(s)")]
    WrongPartCount { found: usize },

    #[error("latitude and longitude must both be non-empty, e.g. '55.7558, 37.6173'")]
    EmptyPart,

    #[error("'{part}' is not a valid floating point number")]
    NotANumber { part: String },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validated WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate after checking both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::LatitudeOutOfRange`] or
    /// [`CoordinateError::LongitudeOutOfRange`]. `NaN` fails both checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Wraps a pair read from the catalog payload without range checks.
    ///
    /// Provider points are trusted to be on the globe; only the inbound
    /// request surface is validated.
    #[must_use]
    pub fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Renders as `"<lat>, <lon>"` with six decimals.
    #[must_use]
    pub fn display_pair(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"<latitude>, <longitude>"`.
///
/// # Errors
///
/// Returns a [`CoordinateError`] naming the first violated constraint: part
/// count, empty part, non-numeric part, then latitude and longitude bounds.
pub fn parse_coordinate_pair(text: &str) -> Result<Coordinate, CoordinateError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(CoordinateError::WrongPartCount { found: parts.len() });
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err(CoordinateError::EmptyPart);
    }

    let parse = |part: &str| {
        part.parse::<f64>()
            .map_err(|_| CoordinateError::NotANumber {
                part: part.to_string(),
            })
    };
    let latitude = parse(parts[0])?;
    let longitude = parse(parts[1])?;

    Coordinate::new(latitude, longitude)
}

/// Haversine distance between two points in kilometers.
#[must_use]
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid test coordinate")
    }

    #[test]
    fn parse_accepts_pair_with_whitespace() {
        let c = parse_coordinate_pair("  55.741834 , 37.630808 ").expect("should parse");
        assert!((c.latitude() - 55.741_834).abs() < 1e-9);
        assert!((c.longitude() - 37.630_808).abs() < 1e-9);
    }

    #[test]
    fn parse_accepts_bounds_inclusive() {
        for (lat, lon) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0), (-33.5, 151.25)] {
            let c = parse_coordinate_pair(&format!("{lat}, {lon}")).expect("in range");
            assert!((c.latitude() - lat).abs() < 1e-12);
            assert!((c.longitude() - lon).abs() < 1e-12);
        }
    }

    #[test]
    fn parse_rejects_missing_comma() {
        assert_eq!(
            parse_coordinate_pair("55.7558 37.6173"),
            Err(CoordinateError::WrongPartCount { found: 1 })
        );
    }

    #[test]
    fn parse_rejects_three_parts() {
        assert_eq!(
            parse_coordinate_pair("55.7, 37.6, 1.0"),
            Err(CoordinateError::WrongPartCount { found: 3 })
        );
    }

    #[test]
    fn parse_rejects_empty_part() {
        assert_eq!(
            parse_coordinate_pair("55.7558, "),
            Err(CoordinateError::EmptyPart)
        );
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = parse_coordinate_pair("north, 37.6").unwrap_err();
        assert!(matches!(err, CoordinateError::NotANumber { ref part } if part == "north"));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            parse_coordinate_pair("90.1, 37.6"),
            Err(CoordinateError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            parse_coordinate_pair("55.7, -180.5"),
            Err(CoordinateError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn parse_rejects_nan() {
        assert!(parse_coordinate_pair("NaN, 37.6").is_err());
    }

    #[test]
    fn error_message_names_the_constraint() {
        let msg = parse_coordinate_pair("1,2,3").unwrap_err().to_string();
        assert!(msg.contains("separated by a comma"), "got: {msg}");
        let msg = parse_coordinate_pair("95, 10").unwrap_err().to_string();
        assert!(msg.contains("[-90, 90]"), "got: {msg}");
    }

    #[test]
    fn distance_is_zero_for_identical_points() {
        let a = point(55.7558, 37.6173);
        assert!(great_circle_distance_km(a, a).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(55.7558, 37.6173);
        let b = point(59.9386, 30.3141);
        let ab = great_circle_distance_km(a, b);
        let ba = great_circle_distance_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_between_nearby_moscow_points_is_about_half_a_km() {
        let a = point(55.7558, 37.6173);
        let b = point(55.7512, 37.6184);
        let d = great_circle_distance_km(a, b);
        assert!(d > 0.4 && d < 0.6, "got {d}");
    }

    #[test]
    fn distance_along_meridian_matches_arc_length() {
        let a = point(55.0, 37.0);
        let b = point(56.0, 37.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((great_circle_distance_km(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn display_pair_uses_six_decimals() {
        assert_eq!(point(55.7558, 37.6173).display_pair(), "55.755800, 37.617300");
    }
}
