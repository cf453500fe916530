//! Heuristic extraction of location, price and capacity from catalog items.
//!
//! Nothing here fails: a field that cannot be read is reported as absent and
//! the caller decides what that means.

use parkfind_core::Coordinate;
use parkfind_dgis::RawCandidate;
use serde_json::{Map, Value};

use crate::payload::{
    coerce_f64, coerce_int, is_truthy, scalar_text, CapacityValue, PriceValue, PurposeValue,
};

/// Currency appended to bare numeric prices.
pub const DEFAULT_CURRENCY: &str = "₽";
/// Reported for a paid parking whose tariff could not be found.
pub const PAID_TARIFF_UNSPECIFIED: &str = "Платная (тариф не указан)";
/// Reported for a parking that is not flagged as paid.
pub const FREE_OF_CHARGE: &str = "Бесплатно";
/// Name used when the item has none.
pub const UNNAMED_PARKING: &str = "Название не указано";

const LOCATION_FIELDS: &[&str] = &["point", "geometry", "location"];

/// Location of the item, from the first of `point`, `geometry`, `location`
/// that carries both a latitude and a longitude.
#[must_use]
pub fn extract_coordinates(item: &RawCandidate) -> Option<Coordinate> {
    LOCATION_FIELDS
        .iter()
        .filter_map(|field| item.get(*field).and_then(Value::as_object))
        .find_map(|loc| {
            let lat = numeric_field(loc, &["lat", "latitude"])?;
            let lon = numeric_field(loc, &["lon", "longitude"])?;
            Some(Coordinate::unchecked(lat, lon))
        })
}

fn numeric_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(coerce_f64))
}

/// Renders a price field of any shape as one line of text.
///
/// Strings are trimmed, numbers get the ruble sign, objects render as
/// `"<amount> <currency>[ / <unit>]"` or recurse into their `items`/`tariffs`,
/// and lists join their rendered elements with `"; "`.
#[must_use]
pub fn format_price(value: Option<&Value>) -> Option<String> {
    match PriceValue::decode(value) {
        PriceValue::Absent | PriceValue::Unsupported => None,
        PriceValue::Text(s) => non_blank(s),
        PriceValue::Number(n) => Some(format!("{n} {DEFAULT_CURRENCY}")),
        PriceValue::Tariff(tariff) => {
            if let Some(amount) = tariff.amount.and_then(scalar_text) {
                let currency = tariff
                    .currency
                    .and_then(scalar_text)
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
                let mut line = format!("{amount} {currency}").trim().to_string();
                if let Some(unit) = tariff.unit.and_then(scalar_text) {
                    line = format!("{line} / {unit}");
                }
                Some(line)
            } else {
                tariff.nested.and_then(|nested| format_price(Some(nested)))
            }
        }
        PriceValue::List(items) => {
            let parts: Vec<String> = items.iter().filter_map(|v| format_price(Some(v))).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
    }
}

/// Free-text tariff comment attached to the item's parking block.
///
/// Entries are the `parking` object plus the objects in `parking.items`, or
/// the objects in `parking` when it is a list. An entry whose `id` equals
/// `target_id` wins; otherwise the first entry with a comment; otherwise the
/// item-level `parking_comment`.
#[must_use]
pub fn extract_parking_comment(item: &RawCandidate, target_id: Option<&str>) -> Option<String> {
    let entries = tariff_entries(item);

    if let Some(target) = target_id {
        let matched = entries
            .iter()
            .filter(|entry| entry.get("id").and_then(scalar_text).as_deref() == Some(target))
            .find_map(|entry| comment_of(entry));
        if matched.is_some() {
            return matched;
        }
    }

    entries
        .iter()
        .find_map(|entry| comment_of(entry))
        .or_else(|| item.get("parking_comment").and_then(Value::as_str).and_then(non_blank))
}

fn tariff_entries(item: &RawCandidate) -> Vec<&Map<String, Value>> {
    match item.get("parking") {
        Some(Value::Object(parking)) => {
            let mut entries = vec![parking];
            if let Some(Value::Array(nested)) = parking.get("items") {
                entries.extend(nested.iter().filter_map(Value::as_object));
            }
            entries
        }
        Some(Value::Array(list)) => list.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn comment_of(entry: &Map<String, Value>) -> Option<String> {
    entry.get("comment").and_then(Value::as_str).and_then(non_blank)
}

/// Human-readable price description for the item.
///
/// Priority: `fallback_comment`, the item's own tariff comment, the first
/// formattable of `price`, `parking.price`, `parking.tariffs`,
/// `parking.payment`, then a paid/free marker.
#[must_use]
pub fn extract_price(item: &RawCandidate, fallback_comment: Option<&str>) -> String {
    if let Some(comment) = fallback_comment.and_then(non_blank) {
        return comment;
    }

    let item_id = item.get("id").and_then(scalar_text);
    if let Some(comment) = extract_parking_comment(item, item_id.as_deref()) {
        return comment;
    }

    let parking = item.get("parking").and_then(Value::as_object);
    let from_parking = |key: &str| parking.and_then(|p| p.get(key));
    let formatted = [
        item.get("price"),
        from_parking("price"),
        from_parking("tariffs"),
        from_parking("payment"),
    ]
    .into_iter()
    .find_map(format_price);

    if let Some(price) = formatted {
        return price;
    }

    if is_truthy(item.get("is_paid")) {
        PAID_TARIFF_UNSPECIFIED.to_string()
    } else {
        FREE_OF_CHARGE.to_string()
    }
}

/// `(total, free)` parking spaces.
///
/// Uses `parking.spaces.common` when both counts are integers, otherwise the
/// total from `capacity` with no free count.
#[must_use]
pub fn extract_spaces(item: &RawCandidate) -> (Option<i64>, Option<i64>) {
    let common = item
        .get("parking")
        .and_then(|p| p.get("spaces"))
        .and_then(|s| s.get("common"))
        .and_then(Value::as_object);

    if let Some(common) = common {
        let total = common.get("total").and_then(coerce_int);
        let free = common.get("free").and_then(coerce_int);
        if let (Some(total), Some(free)) = (total, free) {
            return (Some(total), Some(free));
        }
    }

    (CapacityValue::decode(item.get("capacity")).total(), None)
}

/// Capacity reported on the record: the space total, else a scalar `capacity`.
#[must_use]
pub fn extract_capacity(item: &RawCandidate, total_spaces: Option<i64>) -> Option<i64> {
    total_spaces.or_else(|| CapacityValue::decode(item.get("capacity")).scalar())
}

#[must_use]
pub fn extract_purpose_label(item: &RawCandidate) -> Option<String> {
    PurposeValue::decode(item.get("purpose")).display()
}

#[must_use]
pub fn extract_name(item: &RawCandidate) -> String {
    item.get("name")
        .and_then(Value::as_str)
        .and_then(non_blank)
        .unwrap_or_else(|| UNNAMED_PARKING.to_string())
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
