pub mod app_config;
pub mod config;
pub mod geo;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, PricingMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{great_circle_distance_km, parse_coordinate_pair, Coordinate, CoordinateError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
