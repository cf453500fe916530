//! Nearest paid public parking resolution over 2GIS catalog data.
//!
//! Pipeline: fetch candidates around a point, drop the ones that are not paid
//! public car parkings, enrich the rest with distances, price and capacity,
//! then pick the closest. Catalog payloads are loosely typed, so every field
//! read goes through [`payload`] decoding with explicit fallbacks.

pub mod error;
pub mod estimate;
pub mod extract;
pub mod filter;
pub mod payload;
pub mod pipeline;
pub mod query;
pub mod record;

pub use error::ResolveError;
pub use estimate::estimate_hourly_price;
pub use filter::is_admissible;
pub use pipeline::{ParkingResolver, ResolverSettings};
pub use query::SearchQuery;
pub use record::{NearestParking, ParkingRecord, Pricing};
