use parkfind_core::app_config::{MAX_LIMIT, MAX_RADIUS_M};
use parkfind_core::{parse_coordinate_pair, Coordinate};

use crate::error::ResolveError;
use crate::pipeline::ResolverSettings;

/// A validated nearest-parking request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub point: Coordinate,
    pub radius_m: u32,
    pub limit: u32,
}

impl SearchQuery {
    /// Parses the request coordinate and applies defaults for the rest.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidCoordinate`] if `coordinates` is not a valid
    ///   `"lat, lon"` pair.
    /// - [`ResolveError::InvalidParameter`] if `radius` is outside
    ///   `1..=40000` or `limit` outside `1..=50`.
    pub fn parse(
        coordinates: &str,
        radius: Option<u32>,
        limit: Option<u32>,
        settings: &ResolverSettings,
    ) -> Result<Self, ResolveError> {
        let point = parse_coordinate_pair(coordinates)?;
        let radius_m = radius.unwrap_or(settings.default_radius);
        let limit = limit.unwrap_or(settings.default_limit);

        if !(1..=MAX_RADIUS_M).contains(&radius_m) {
            return Err(ResolveError::InvalidParameter {
                name: "radius",
                reason: format!("must be between 1 and {MAX_RADIUS_M} meters, got {radius_m}"),
            });
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ResolveError::InvalidParameter {
                name: "limit",
                reason: format!("must be between 1 and {MAX_LIMIT}, got {limit}"),
            });
        }

        Ok(Self {
            point,
            radius_m,
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkfind_core::PricingMode;

    fn settings() -> ResolverSettings {
        ResolverSettings {
            center: Coordinate::new(55.7558, 37.6173).expect("valid"),
            pricing_mode: PricingMode::ProviderTariff,
            default_radius: 600,
            default_limit: 10,
        }
    }

    #[test]
    fn applies_defaults() {
        let q = SearchQuery::parse("55.741834, 37.630808", None, None, &settings())
            .expect("valid query");
        assert_eq!(q.radius_m, 600);
        assert_eq!(q.limit, 10);
        assert!((q.point.latitude() - 55.741_834).abs() < 1e-9);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let q = SearchQuery::parse("55.7, 37.6", Some(40_000), Some(50), &settings())
            .expect("valid query");
        assert_eq!(q.radius_m, 40_000);
        assert_eq!(q.limit, 50);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let err = SearchQuery::parse("55.7", None, None, &settings()).expect_err("no comma");
        assert!(matches!(err, ResolveError::InvalidCoordinate(_)), "got: {err:?}");

        let err = SearchQuery::parse("95, 37", None, None, &settings()).expect_err("lat range");
        assert!(matches!(err, ResolveError::InvalidCoordinate(_)), "got: {err:?}");
    }

    #[test]
    fn rejects_out_of_range_radius_and_limit() {
        for radius in [0, 40_001] {
            let err = SearchQuery::parse("55.7, 37.6", Some(radius), None, &settings())
                .expect_err("radius out of range");
            assert!(
                matches!(err, ResolveError::InvalidParameter { name: "radius", .. }),
                "got: {err:?}"
            );
        }
        let err = SearchQuery::parse("55.7, 37.6", None, Some(51), &settings())
            .expect_err("limit out of range");
        assert!(
            matches!(err, ResolveError::InvalidParameter { name: "limit", .. }),
            "got: {err:?}"
        );
    }
}
