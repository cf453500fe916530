//! Variant decoding of loosely-typed catalog fields.
//!
//! The same attribute arrives in different shapes depending on the item
//! (`purpose: "car"` vs `purpose: ["car", "disabled"]`, `capacity: 40` vs
//! `capacity: {"total": 40}`). Each shape is decoded into an enum first so the
//! extraction rules in [`crate::extract`] can match on it exhaustively.

use serde_json::{Map, Number, Value};

/// Non-null, non-false, non-zero, non-empty.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// First truthy value among `keys` in `obj`.
pub(crate) fn first_truthy<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .map(|k| obj.get(*k))
        .find(|v| is_truthy(*v))
        .flatten()
}

/// Integer reading of a count field.
///
/// Integers pass through, floats truncate, strings are trimmed and parsed.
/// Booleans, fractional strings and anything structured yield `None`.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                // Saturating cast; counts never approach i64 bounds.
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Float reading of a coordinate component: numbers or numeric strings.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text form of a scalar: strings verbatim, numbers and booleans rendered.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// The `purpose` field.
#[derive(Debug, Clone, Copy)]
pub enum PurposeValue<'a> {
    Absent,
    Text(&'a str),
    List(&'a [Value]),
    Other(&'a Value),
}

impl<'a> PurposeValue<'a> {
    #[must_use]
    pub fn decode(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Text(s),
            Some(Value::Array(items)) => Self::List(items),
            Some(other) => Self::Other(other),
        }
    }

    /// Lowercased, trimmed, non-empty tokens.
    ///
    /// Strings are split on commas; list elements are taken one token each.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let split = |s: &str| -> Vec<String> {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
                .collect()
        };

        match *self {
            Self::Absent => Vec::new(),
            Self::Text(s) => split(s),
            Self::List(items) => items
                .iter()
                .filter_map(scalar_text)
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            Self::Other(v) => scalar_text(v).map(|t| split(&t)).unwrap_or_default(),
        }
    }

    /// Label shown to the caller: the raw string, or list elements joined.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        match *self {
            Self::Absent => None,
            Self::Text(s) => Some(s.to_string()),
            Self::List(items) => Some(
                items
                    .iter()
                    .filter_map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Other(v) => scalar_text(v),
        }
    }
}

/// A price-bearing field (`price`, `parking.price`, `parking.tariffs`, ...).
#[derive(Debug, Clone, Copy)]
pub enum PriceValue<'a> {
    Absent,
    Text(&'a str),
    Number(&'a Number),
    Tariff(TariffObject<'a>),
    List(&'a [Value]),
    Unsupported,
}

/// The keys of an object-shaped price the formatter cares about.
#[derive(Debug, Clone, Copy)]
pub struct TariffObject<'a> {
    pub amount: Option<&'a Value>,
    pub currency: Option<&'a Value>,
    pub unit: Option<&'a Value>,
    pub nested: Option<&'a Value>,
}

impl<'a> TariffObject<'a> {
    fn decode(obj: &'a Map<String, Value>) -> Self {
        // `value` and `amount` must be truthy to count; `cost` is taken as the
        // last resort even when zero, so `{"cost": 0}` still renders.
        let amount = first_truthy(obj, &["value", "amount"])
            .or_else(|| obj.get("cost").filter(|v| !v.is_null()));

        Self {
            amount,
            currency: first_truthy(obj, &["currency", "currency_code"]),
            unit: first_truthy(obj, &["unit", "period", "time"]),
            nested: first_truthy(obj, &["items", "tariffs"]),
        }
    }
}

impl<'a> PriceValue<'a> {
    #[must_use]
    pub fn decode(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Text(s),
            Some(Value::Number(n)) => Self::Number(n),
            Some(Value::Object(obj)) => Self::Tariff(TariffObject::decode(obj)),
            Some(Value::Array(items)) => Self::List(items),
            Some(Value::Bool(_)) => Self::Unsupported,
        }
    }
}

/// The top-level `capacity` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityValue {
    Absent,
    Count(i64),
    Breakdown { total: Option<i64> },
    Unparsable,
}

impl CapacityValue {
    #[must_use]
    pub fn decode(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Object(obj)) => Self::Breakdown {
                total: obj.get("total").and_then(coerce_int),
            },
            Some(other) => coerce_int(other).map_or(Self::Unparsable, Self::Count),
        }
    }

    /// Total places, whichever shape carried it.
    #[must_use]
    pub fn total(self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(n),
            Self::Breakdown { total } => total,
            Self::Absent | Self::Unparsable => None,
        }
    }

    /// Only the scalar shape; an object-shaped capacity is not a count.
    #[must_use]
    pub fn scalar(self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(n),
            Self::Absent | Self::Breakdown { .. } | Self::Unparsable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_emptiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!("yes"))));
    }

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(12)), Some(12));
        assert_eq!(coerce_int(&json!(12.9)), Some(12));
        assert_eq!(coerce_int(&json!(" 40 ")), Some(40));
        assert_eq!(coerce_int(&json!("12.5")), None);
        assert_eq!(coerce_int(&json!(true)), None);
        assert_eq!(coerce_int(&json!({"total": 3})), None);
    }

    #[test]
    fn purpose_tokens_from_comma_string() {
        let v = json!("Car, Disabled ,");
        assert_eq!(
            PurposeValue::decode(Some(&v)).tokens(),
            vec!["car".to_string(), "disabled".to_string()]
        );
    }

    #[test]
    fn purpose_tokens_from_list_are_not_split() {
        let v = json!(["car,truck", " CAR "]);
        assert_eq!(
            PurposeValue::decode(Some(&v)).tokens(),
            vec!["car,truck".to_string(), "car".to_string()]
        );
    }

    #[test]
    fn purpose_display_joins_lists() {
        let v = json!(["car", "disabled"]);
        assert_eq!(
            PurposeValue::decode(Some(&v)).display().as_deref(),
            Some("car, disabled")
        );
        assert_eq!(PurposeValue::decode(None).display(), None);
    }

    #[test]
    fn tariff_object_amount_prefers_truthy_keys() {
        let v = json!({"value": 0, "amount": 150, "cost": 90});
        let PriceValue::Tariff(t) = PriceValue::decode(Some(&v)) else {
            panic!("expected tariff object");
        };
        assert_eq!(t.amount, Some(&json!(150)));
    }

    #[test]
    fn tariff_object_zero_cost_is_kept() {
        let v = json!({"cost": 0});
        let PriceValue::Tariff(t) = PriceValue::decode(Some(&v)) else {
            panic!("expected tariff object");
        };
        assert_eq!(t.amount, Some(&json!(0)));
    }

    #[test]
    fn capacity_shapes() {
        assert_eq!(CapacityValue::decode(Some(&json!(25))), CapacityValue::Count(25));
        assert_eq!(
            CapacityValue::decode(Some(&json!({"total": "30"}))),
            CapacityValue::Breakdown { total: Some(30) }
        );
        assert_eq!(
            CapacityValue::decode(Some(&json!("lots"))),
            CapacityValue::Unparsable
        );
        assert_eq!(CapacityValue::decode(None), CapacityValue::Absent);
        assert_eq!(CapacityValue::Breakdown { total: Some(30) }.scalar(), None);
    }
}
