//! Output records.

use parkfind_core::{great_circle_distance_km, Coordinate, PricingMode};
use parkfind_dgis::RawCandidate;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::estimate::estimate_hourly_price;
use crate::extract::{
    extract_capacity, extract_coordinates, extract_name, extract_price, extract_purpose_label,
    extract_spaces,
};
use crate::payload::{is_truthy, scalar_text};

/// Price of a parking, in the form selected by [`PricingMode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Pricing {
    /// Tariff text taken from the catalog.
    #[serde(rename = "price_comment")]
    Comment(String),
    /// Rubles per hour estimated from the distance to the center.
    #[serde(rename = "price_per_hour")]
    HourlyEstimate(u32),
}

/// One admissible parking, enriched with distances and price.
#[derive(Debug, Clone, Serialize)]
pub struct ParkingRecord {
    /// Catalog id, used for the follow-up tariff lookup.
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "coordinates", serialize_with = "serialize_coordinate")]
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    pub is_paid: bool,
    #[serde(flatten)]
    pub pricing: Pricing,
    pub distance_to_request_m: f64,
    pub distance_to_center_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spaces: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_spaces: Option<i64>,
    /// Unrounded distance to the request point, the sort key.
    #[serde(skip)]
    pub(crate) request_distance_km: f64,
}

/// Result of a nearest or by-id resolution.
#[derive(Debug, Clone, Serialize)]
pub struct NearestParking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_found: Option<u64>,
    pub parking: ParkingRecord,
}

impl ParkingRecord {
    /// Builds the record for an admissible candidate.
    ///
    /// Returns `None` when the candidate carries no usable location. The
    /// price comment falls back to `fallback_comment`, then to the item's own
    /// `parking_comment`.
    pub(crate) fn from_candidate(
        item: &RawCandidate,
        request_point: Coordinate,
        center: Coordinate,
        pricing_mode: PricingMode,
        fallback_comment: Option<&str>,
    ) -> Option<Self> {
        let coordinate = extract_coordinates(item)?;
        let request_distance_km = great_circle_distance_km(request_point, coordinate);
        let center_distance_km = great_circle_distance_km(center, coordinate);

        let pricing = match pricing_mode {
            PricingMode::ProviderTariff => {
                let fallback = fallback_comment
                    .or_else(|| item.get("parking_comment").and_then(Value::as_str));
                Pricing::Comment(extract_price(item, fallback))
            }
            PricingMode::DistanceEstimate => {
                Pricing::HourlyEstimate(estimate_hourly_price(center_distance_km))
            }
        };

        let (total_spaces, free_spaces) = extract_spaces(item);

        Some(Self {
            id: item.get("id").and_then(scalar_text),
            name: extract_name(item),
            coordinate,
            purpose: extract_purpose_label(item),
            capacity: extract_capacity(item, total_spaces),
            is_paid: is_truthy(item.get("is_paid")),
            pricing,
            distance_to_request_m: round_to(request_distance_km * 1000.0, 2),
            distance_to_center_km: round_to(center_distance_km, 3),
            total_spaces,
            free_spaces,
            request_distance_km,
        })
    }

    /// Replaces the tariff text. Estimated prices are left alone.
    pub(crate) fn refresh_price_comment(&mut self, comment: String) {
        if let Pricing::Comment(current) = &mut self.pricing {
            *current = comment;
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn serialize_coordinate<S: Serializer>(c: &Coordinate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&c.display_pair())
}
