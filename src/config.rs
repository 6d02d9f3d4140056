//! Application configuration
//!
//! Everything is read from environment variables with sensible defaults,
//! so the binary runs with no setup. The upstream base URLs are
//! overridable mainly so tests can point the client at a local mock
//! server.

use std::env;

/// Default Open-Meteo endpoints
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Runtime configuration for the Skycast server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Base URL of the geocoding API
    pub geocoding_url: String,
    /// Base URL of the forecast API
    pub forecast_url: String,
    /// Base URL of the air-quality API
    pub air_quality_url: String,
    /// Per-request timeout for outbound calls, in seconds
    pub request_timeout_secs: u64,
    /// Directory served as the static front-end
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            air_quality_url: DEFAULT_AIR_QUALITY_URL.to_string(),
            request_timeout_secs: 10,
            static_dir: "static".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `SKYCAST_*` environment variables,
    /// falling back to defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parsed("SKYCAST_PORT", defaults.port),
            geocoding_url: env_or("SKYCAST_GEOCODING_URL", defaults.geocoding_url),
            forecast_url: env_or("SKYCAST_FORECAST_URL", defaults.forecast_url),
            air_quality_url: env_or("SKYCAST_AIR_QUALITY_URL", defaults.air_quality_url),
            request_timeout_secs: env_parsed(
                "SKYCAST_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            static_dir: env_or("SKYCAST_STATIC_DIR", defaults.static_dir),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
