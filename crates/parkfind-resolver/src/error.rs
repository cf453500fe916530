use parkfind_core::CoordinateError;
use parkfind_dgis::DgisError;
use thiserror::Error;

/// Errors returned by [`crate::ParkingResolver`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The request coordinate is malformed or out of range.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    /// A request parameter other than the coordinate is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The catalog call failed; status and body are kept on the source.
    #[error("parking provider unavailable: {0}")]
    ProviderUnavailable(#[from] DgisError),

    #[error("{0}")]
    NotFound(String),
}
