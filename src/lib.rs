//! Skycast - weather aggregation backend over Open-Meteo
//!
//! This library resolves city names via geocoding, fans out to the
//! forecast and air-quality APIs, and merges the three results into a
//! single bundle. It also provides the pure categorization and unit
//! conversion helpers exposed as utility endpoints.

pub mod api;
pub mod conditions;
pub mod config;
pub mod error;
pub mod models;
pub mod units;
pub mod validate;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::WeatherError;
pub use models::{AirQualitySnapshot, ForecastSnapshot, Location, WeatherBundle};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherError>;
