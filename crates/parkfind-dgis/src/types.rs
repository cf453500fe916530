use serde_json::{Map, Value};

/// One catalog item, kept as an untyped JSON object.
///
/// The catalog is inconsistent about field shapes (`purpose` may be a string
/// or a list, `capacity` a number or an object), so decoding is deferred to
/// the resolver which knows the fallback rules.
pub type RawCandidate = Map<String, Value>;

/// One page of a radius search.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub items: Vec<RawCandidate>,
    /// Total matches reported by the catalog, when present.
    pub total: Option<u64>,
}

impl SearchPage {
    /// Extracts items and total from a `{"result": {...}}` envelope.
    ///
    /// A missing `result` (the catalog's "nothing found" shape) yields an
    /// empty page. Non-object entries in `items` are skipped. `total` falls
    /// back to `total_count`, which some responses use instead.
    #[must_use]
    pub fn from_envelope(body: &Value) -> Self {
        let Some(result) = body.get("result") else {
            return Self::default();
        };

        let items = result
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let total = result
            .get("total")
            .and_then(Value::as_u64)
            .or_else(|| result.get("total_count").and_then(count_from_value));

        Self { items, total }
    }
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
