//! Admissibility: paid, publicly accessible, car parking.

use parkfind_dgis::RawCandidate;
use serde_json::Value;

use crate::payload::{is_truthy, PurposeValue};

const ALLOWED_PURPOSES: &[&str] = &["car"];
const EXCLUDED_PURPOSES: &[&str] = &["disabled", "invalid", "resident", "residents"];
/// "обществен" is the stem of the Russian for "public".
const ACCESS_KEYWORDS: &[&str] = &["public", "обществен"];

/// Whether a catalog item is a parking the resolver may return.
///
/// All checks must pass. An item with no purpose at all is rejected rather
/// than treated as unknown.
#[must_use]
pub fn is_admissible(candidate: &RawCandidate) -> bool {
    purpose_allows(candidate) && is_paid(candidate) && is_public(candidate)
}

fn purpose_allows(candidate: &RawCandidate) -> bool {
    let tokens = PurposeValue::decode(candidate.get("purpose")).tokens();
    if tokens.is_empty() {
        return false;
    }
    if tokens.iter().any(|t| EXCLUDED_PURPOSES.contains(&t.as_str())) {
        return false;
    }
    tokens.iter().any(|t| ALLOWED_PURPOSES.contains(&t.as_str()))
}

fn is_paid(candidate: &RawCandidate) -> bool {
    is_truthy(candidate.get("is_paid"))
}

/// Only string `access` values are read; any other shape counts as empty.
fn is_public(candidate: &RawCandidate) -> bool {
    let access = candidate
        .get("access")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    ACCESS_KEYWORDS.iter().any(|k| access.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: Value) -> RawCandidate {
        value.as_object().cloned().expect("test candidate is an object")
    }

    #[test]
    fn accepts_paid_public_car_parking() {
        let c = candidate(json!({
            "purpose": "car",
            "is_paid": true,
            "access": "public parking"
        }));
        assert!(is_admissible(&c));
    }

    #[test]
    fn accepts_russian_access_text() {
        let c = candidate(json!({
            "purpose": ["car"],
            "is_paid": true,
            "access": "Общественная"
        }));
        assert!(is_admissible(&c));
    }

    #[test]
    fn excluded_purpose_wins_over_allowed() {
        let c = candidate(json!({
            "purpose": ["disabled"],
            "is_paid": true,
            "access": "public"
        }));
        assert!(!is_admissible(&c));

        let c = candidate(json!({
            "purpose": "car, residents",
            "is_paid": true,
            "access": "public"
        }));
        assert!(!is_admissible(&c));
    }

    #[test]
    fn rejects_unpaid() {
        let c = candidate(json!({
            "purpose": "car",
            "is_paid": false,
            "access": "public"
        }));
        assert!(!is_admissible(&c));
    }

    #[test]
    fn rejects_missing_purpose() {
        let c = candidate(json!({
            "is_paid": true,
            "access": "public"
        }));
        assert!(!is_admissible(&c));

        let c = candidate(json!({
            "purpose": "  ,  ",
            "is_paid": true,
            "access": "public"
        }));
        assert!(!is_admissible(&c));
    }

    #[test]
    fn rejects_purpose_without_car() {
        let c = candidate(json!({
            "purpose": ["truck", "bus"],
            "is_paid": true,
            "access": "public"
        }));
        assert!(!is_admissible(&c));
    }

    #[test]
    fn rejects_private_or_missing_access() {
        let private = candidate(json!({
            "purpose": "car",
            "is_paid": true,
            "access": "private"
        }));
        assert!(!is_admissible(&private));

        let missing = candidate(json!({
            "purpose": "car",
            "is_paid": true
        }));
        assert!(!is_admissible(&missing));
    }

    #[test]
    fn rejects_non_string_access() {
        for access in [json!({"type": "public"}), json!(["public"]), json!(true), json!(1)] {
            let c = candidate(json!({
                "purpose": "car",
                "is_paid": true,
                "access": access
            }));
            assert!(!is_admissible(&c), "access {access} should not be public");
        }
    }
}
