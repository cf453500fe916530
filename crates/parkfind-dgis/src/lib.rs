//! Thin async client for the 2GIS Catalog API 3.0.
//!
//! Only the two endpoints the parking resolver needs are wrapped: a radius
//! search around a point and a lookup by catalog id. Items are returned as raw
//! JSON objects; interpreting them is the resolver's job.

pub mod client;
pub mod error;
pub mod fields;
pub mod types;

pub use client::DgisClient;
pub use error::DgisError;
pub use types::{RawCandidate, SearchPage};
