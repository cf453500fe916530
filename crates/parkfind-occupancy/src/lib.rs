//! Heuristic occupancy estimate for a parking.
//!
//! A fixed-weight blend of distance, price, size and time-of-day factors. Not
//! backed by live data; use it as a rough hint next to a resolved parking.

pub mod error;
pub mod model;
pub mod request;

pub use error::OccupancyError;
pub use model::{estimate_occupancy, time_context, OccupancyLevel};
pub use request::{OccupancyParameters, OccupancyReport, OccupancyRequest};
