//! Data model for the aggregation workflow
//!
//! `Location` is fully typed; the forecast and air-quality snapshots keep
//! their sections as JSON maps because the upstream field set is an opaque
//! pass-through. Missing sections deserialize to empty maps instead of
//! failing the whole response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A geocoded place, resolved from a free-text city name.
///
/// Produced by the geocoding step and immutable afterwards; the forecast
/// and air-quality steps consume its coordinates and timezone.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Place name as returned by the geocoder
    pub name: String,
    /// Country name, when the geocoder knows it
    pub country: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone of the place
    pub timezone: Option<String>,
    /// First-level administrative region (state, Bundesland, ...)
    pub admin1: Option<String>,
    pub population: Option<u64>,
}

impl Location {
    /// Timezone to forward to the forecast and air-quality calls.
    /// Open-Meteo accepts the literal `auto` when none was resolved.
    #[must_use]
    pub fn timezone_or_auto(&self) -> &str {
        self.timezone.as_deref().unwrap_or("auto")
    }
}

/// Forecast response sections, passed through from the provider.
///
/// The parallel arrays inside `hourly` share an index domain (`time[i]`
/// belongs to `temperature_2m[i]`); equal lengths across fields are a
/// provider guarantee, not one this service re-checks.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ForecastSnapshot {
    #[serde(default)]
    pub current: Map<String, Value>,
    #[serde(default)]
    pub current_units: Map<String, Value>,
    #[serde(default)]
    pub hourly: Map<String, Value>,
    #[serde(default)]
    pub hourly_units: Map<String, Value>,
    #[serde(default)]
    pub daily: Map<String, Value>,
    #[serde(default)]
    pub daily_units: Map<String, Value>,
}

/// Air-quality response sections, same shape as the forecast snapshot
/// with pollutant fields.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AirQualitySnapshot {
    #[serde(default)]
    pub current: Map<String, Value>,
    #[serde(default)]
    pub current_units: Map<String, Value>,
    #[serde(default)]
    pub hourly: Map<String, Value>,
    #[serde(default)]
    pub hourly_units: Map<String, Value>,
}

/// Combined result of the aggregation workflow. Built per request and
/// discarded after serialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherBundle {
    pub location: Location,
    pub forecast: ForecastSnapshot,
    pub air_quality: AirQualitySnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_defaults_to_auto() {
        let location = Location {
            name: "Berlin".to_string(),
            country: Some("Germany".to_string()),
            latitude: 52.52,
            longitude: 13.41,
            timezone: None,
            admin1: None,
            population: None,
        };
        assert_eq!(location.timezone_or_auto(), "auto");
    }

    #[test]
    fn test_forecast_snapshot_tolerates_missing_sections() {
        let snapshot: ForecastSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.current.is_empty());
        assert!(snapshot.hourly.is_empty());
        assert!(snapshot.daily.is_empty());
    }

    #[test]
    fn test_forecast_snapshot_keeps_unknown_fields_opaque() {
        let json = r#"{
            "current": {"temperature_2m": 21.4, "is_day": 1},
            "current_units": {"temperature_2m": "°C"},
            "hourly": {"time": ["2026-08-31T12:00"], "uv_index": [4.5]}
        }"#;
        let snapshot: ForecastSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snapshot.current.get("temperature_2m"),
            Some(&serde_json::json!(21.4))
        );
        assert_eq!(
            snapshot.hourly.get("uv_index"),
            Some(&serde_json::json!([4.5]))
        );
        assert!(snapshot.daily.is_empty());
    }
}
