//! `fields` parameter values requested from the catalog.
//!
//! The catalog omits most attributes unless they are asked for explicitly.

/// Fields requested for the radius search.
pub const SEARCH_FIELDS: &[&str] = &[
    "items.name",
    "items.address_name",
    "items.point",
    "items.purpose",
    "items.capacity",
    "items.is_paid",
    "items.access",
    "items.access_comment",
    "items.parking",
    "items.parking.congestion",
    "items.parking.tariffs",
    "items.parking.price",
    "items.for_trucks",
    "items.paving_type",
    "items.is_incentive",
    "items.level_count",
    "items.floors",
    "items.contact_groups",
    "items.reviews",
    "items.schedule",
];

/// Fields requested when resolving a single parking by id.
pub const LOOKUP_FIELDS: &[&str] = &[
    "items.name",
    "items.point",
    "items.purpose",
    "items.capacity",
    "items.is_paid",
    "items.access",
    "items.access_comment",
    "items.parking",
    "items.parking.congestion",
    "items.parking.tariffs",
    "items.parking.price",
    "items.for_trucks",
    "items.paving_type",
    "items.is_incentive",
    "items.level_count",
    "items.contact_groups",
    "items.reviews",
    "items.schedule",
];

/// Only the tariff block, for the follow-up call on the nearest parking.
pub const TARIFF_FIELDS: &str = "items.parking";
