//! Nearest-parking resolution.

use parkfind_core::{AppConfig, Coordinate, PricingMode};
use parkfind_dgis::fields::{LOOKUP_FIELDS, TARIFF_FIELDS};
use parkfind_dgis::{DgisClient, DgisError};

use crate::error::ResolveError;
use crate::extract::extract_parking_comment;
use crate::filter::is_admissible;
use crate::query::SearchQuery;
use crate::record::{NearestParking, ParkingRecord};

/// The part of [`AppConfig`] the resolver reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub center: Coordinate,
    pub pricing_mode: PricingMode,
    pub default_radius: u32,
    pub default_limit: u32,
}

impl From<&AppConfig> for ResolverSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            center: config.center,
            pricing_mode: config.pricing_mode,
            default_radius: config.default_radius,
            default_limit: config.default_limit,
        }
    }
}

/// Finds paid public car parkings through the catalog client.
///
/// Holds no per-request state; share one instance behind an `Arc`.
pub struct ParkingResolver {
    client: DgisClient,
    settings: ResolverSettings,
}

impl ParkingResolver {
    #[must_use]
    pub fn new(client: DgisClient, settings: ResolverSettings) -> Self {
        Self { client, settings }
    }

    /// Builds the catalog client and settings from process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DgisError`] if the HTTP client cannot be built or the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, DgisError> {
        let client = DgisClient::with_base_url(
            &config.dgis_api_key,
            config.provider_timeout_secs,
            &config.dgis_base_url,
        )?;
        Ok(Self::new(client, ResolverSettings::from(config)))
    }

    #[must_use]
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Nearest admissible parking to `coordinates` (`"lat, lon"`).
    ///
    /// 1. Validate the request and apply default radius/limit.
    /// 2. Search the catalog around the point.
    /// 3. Drop inadmissible or location-less candidates, enrich the rest.
    /// 4. Pick the closest to the request point (ties keep catalog order).
    /// 5. In tariff mode, refresh the winner's price comment with one lookup
    ///    by id; a failed lookup keeps the search result.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidCoordinate`] / [`ResolveError::InvalidParameter`]
    ///   for a malformed request.
    /// - [`ResolveError::ProviderUnavailable`] if the search call fails.
    /// - [`ResolveError::NotFound`] if no candidate is admissible.
    pub async fn find_nearest(
        &self,
        coordinates: &str,
        radius: Option<u32>,
        limit: Option<u32>,
    ) -> Result<NearestParking, ResolveError> {
        let query = SearchQuery::parse(coordinates, radius, limit, &self.settings)?;
        let page = self
            .client
            .search_near(query.point, query.radius_m, query.limit)
            .await?;

        let mut records: Vec<ParkingRecord> = page
            .items
            .iter()
            .filter(|item| is_admissible(item))
            .filter_map(|item| {
                ParkingRecord::from_candidate(
                    item,
                    query.point,
                    self.settings.center,
                    self.settings.pricing_mode,
                    None,
                )
            })
            .collect();

        tracing::debug!(
            fetched = page.items.len(),
            admissible = records.len(),
            "filtered parking candidates"
        );

        records.sort_by(|a, b| a.request_distance_km.total_cmp(&b.request_distance_km));
        let Some(mut nearest) = records.into_iter().next() else {
            tracing::info!(
                coordinates,
                radius_m = query.radius_m,
                "no admissible parking in radius"
            );
            return Err(ResolveError::NotFound(format!(
                "no paid public parking found within {} m",
                query.radius_m
            )));
        };

        if self.settings.pricing_mode == PricingMode::ProviderTariff {
            if let Some(id) = nearest.id.clone() {
                self.refresh_tariff(&mut nearest, &id).await;
            }
        }

        let total_found = page.total.unwrap_or(page.items.len() as u64);
        Ok(NearestParking {
            total_found: Some(total_found),
            parking: nearest,
        })
    }

    /// Resolves one parking by catalog id.
    ///
    /// Distances are measured from the configured center.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidParameter`] for a blank id.
    /// - [`ResolveError::ProviderUnavailable`] if the lookup fails.
    /// - [`ResolveError::NotFound`] if the catalog has no such item or it is
    ///   not a paid public car parking.
    pub async fn find_by_id(&self, id: &str) -> Result<NearestParking, ResolveError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ResolveError::InvalidParameter {
                name: "item_id",
                reason: "must not be empty".to_string(),
            });
        }

        let fields = LOOKUP_FIELDS.join(",");
        let item = self
            .client
            .get_by_id(id, Some(&fields))
            .await?
            .ok_or_else(|| ResolveError::NotFound(format!("parking {id} not found")))?;

        if !is_admissible(&item) {
            tracing::debug!(item_id = id, "parking rejected by admissibility filter");
            return Err(ResolveError::NotFound(format!(
                "parking {id} is not a paid public car parking"
            )));
        }

        let comment = match self.settings.pricing_mode {
            PricingMode::ProviderTariff => extract_parking_comment(&item, Some(id)),
            PricingMode::DistanceEstimate => None,
        };

        let parking = ParkingRecord::from_candidate(
            &item,
            self.settings.center,
            self.settings.center,
            self.settings.pricing_mode,
            comment.as_deref(),
        )
        .ok_or_else(|| ResolveError::NotFound(format!("parking {id} has no location")))?;

        Ok(NearestParking {
            total_found: Some(1),
            parking,
        })
    }

    async fn refresh_tariff(&self, record: &mut ParkingRecord, id: &str) {
        match self.client.get_by_id(id, Some(TARIFF_FIELDS)).await {
            Ok(Some(item)) => {
                if let Some(comment) = extract_parking_comment(&item, Some(id)) {
                    record.refresh_price_comment(comment);
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(item_id = id, error = %e, "tariff lookup failed, keeping search price");
            }
        }
    }
}
