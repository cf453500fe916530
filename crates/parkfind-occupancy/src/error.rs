use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OccupancyError {
    #[error("hour must be between 0 and 23, got {0}")]
    HourOutOfRange(i64),

    #[error("{name} must not be negative")]
    Negative { name: &'static str },

    #[error("spots must be positive, got {0}")]
    NoSpots(i64),
}
