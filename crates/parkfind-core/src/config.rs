use crate::app_config::{AppConfig, Environment, PricingMode, MAX_LIMIT, MAX_RADIUS_M};
use crate::geo::{parse_coordinate_pair, Coordinate};
use crate::ConfigError;

pub const DEFAULT_DGIS_BASE_URL: &str = "https://catalog.api.2gis.com/3.0/";

/// Red Square; distance-to-center and the by-id reference point use it.
const DEFAULT_CENTER: &str = "55.7558, 37.6173";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Empty values count as unset, so `DEFAULT_RADIUS=` in a `.env` file falls
/// back to the default instead of failing to parse.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let get = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.trim().is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        get(var).unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_bounded_u32 = |var: &str, default: &str, max: u32| -> Result<u32, ConfigError> {
        let value = or_default(var, default)
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 || value > max {
            return Err(invalid(var, format!("must be between 1 and {max}, got {value}")));
        }
        Ok(value)
    };

    let dgis_api_key = get("DGIS_API_KEY")
        .ok_or_else(|| ConfigError::MissingEnvVar("DGIS_API_KEY".to_string()))?;

    let env = parse_environment(&or_default("PARKFIND_ENV", "development"))?;

    let bind_addr = or_default("PARKFIND_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PARKFIND_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("PARKFIND_LOG_LEVEL", "info");

    let dgis_base_url = or_default("PARKFIND_DGIS_BASE_URL", DEFAULT_DGIS_BASE_URL);
    let provider_timeout_secs = or_default("PARKFIND_PROVIDER_TIMEOUT_SECS", "10")
        .trim()
        .parse::<u64>()
        .map_err(|e| invalid("PARKFIND_PROVIDER_TIMEOUT_SECS", e.to_string()))?;
    if provider_timeout_secs == 0 {
        return Err(invalid(
            "PARKFIND_PROVIDER_TIMEOUT_SECS",
            "must be at least 1 second".to_string(),
        ));
    }

    let default_radius = parse_bounded_u32("PARKFIND_DEFAULT_RADIUS", "600", MAX_RADIUS_M)?;
    let default_limit = parse_bounded_u32("PARKFIND_DEFAULT_LIMIT", "10", MAX_LIMIT)?;

    let center = parse_center(&or_default("PARKFIND_CENTER_COORDINATES", DEFAULT_CENTER))?;

    let auto_price = match get("PARKFIND_AUTO_PRICE_BY_DISTANCE") {
        Some(raw) => parse_bool(&raw).ok_or_else(|| {
            invalid(
                "PARKFIND_AUTO_PRICE_BY_DISTANCE",
                "accepted values: 1/0, true/false, yes/no, on/off".to_string(),
            )
        })?,
        None => false,
    };

    let static_dir = get("PARKFIND_STATIC_DIR").map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        dgis_api_key,
        dgis_base_url,
        provider_timeout_secs,
        default_radius,
        default_limit,
        center,
        pricing_mode: PricingMode::from_auto_price_flag(auto_price),
        static_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PARKFIND_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_center(raw: &str) -> Result<Coordinate, ConfigError> {
    parse_coordinate_pair(raw).map_err(|e| ConfigError::InvalidEnvVar {
        var: "PARKFIND_CENTER_COORDINATES".to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
