use std::net::SocketAddr;
use std::path::PathBuf;

use crate::geo::Coordinate;

/// Largest search radius the catalog accepts, in meters.
pub const MAX_RADIUS_M: u32 = 40_000;

/// Largest page size the catalog accepts.
pub const MAX_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How a parking's price is reported.
///
/// `ProviderTariff` passes through the tariff text found in the catalog payload.
/// `DistanceEstimate` replaces it with an hourly rate derived from the distance
/// to the configured city center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingMode {
    #[default]
    ProviderTariff,
    DistanceEstimate,
}

impl PricingMode {
    #[must_use]
    pub fn from_auto_price_flag(auto_price_by_distance: bool) -> Self {
        if auto_price_by_distance {
            Self::DistanceEstimate
        } else {
            Self::ProviderTariff
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub dgis_api_key: String,
    pub dgis_base_url: String,
    pub provider_timeout_secs: u64,
    pub default_radius: u32,
    pub default_limit: u32,
    pub center: Coordinate,
    pub pricing_mode: PricingMode,
    pub static_dir: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("dgis_api_key", &"[redacted]")
            .field("dgis_base_url", &self.dgis_base_url)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("default_radius", &self.default_radius)
            .field("default_limit", &self.default_limit)
            .field("center", &self.center)
            .field("pricing_mode", &self.pricing_mode)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
