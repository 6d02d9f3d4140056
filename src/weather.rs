//! Open-Meteo client and the weather aggregation workflow
//!
//! The aggregation workflow: geocode first (it supplies the coordinates),
//! then forecast and air quality concurrently, then merge. The first
//! failing step fails the whole request; nothing is retried.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::error::WeatherError;
use crate::models::{AirQualitySnapshot, ForecastSnapshot, Location, WeatherBundle};
use crate::validate::validate_city_name;

/// Current-conditions fields requested from the forecast API
const FORECAST_CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
weather_code,wind_speed_10m,wind_direction_10m,precipitation,pressure_msl,surface_pressure,\
visibility,uv_index,is_day";

/// Hourly fields requested from the forecast API
const FORECAST_HOURLY_FIELDS: &str =
    "temperature_2m,weather_code,precipitation_probability,precipitation,visibility,uv_index";

/// Daily fields requested from the forecast API
const FORECAST_DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
precipitation_sum,precipitation_probability_max,wind_speed_10m_max,uv_index_max";

const FORECAST_DAYS: u8 = 7;

/// Current pollutant fields requested from the air-quality API
const AIR_QUALITY_CURRENT_FIELDS: &str = "european_aqi,pm10,pm2_5,carbon_monoxide,\
nitrogen_dioxide,sulphur_dioxide,ozone,dust";

/// Hourly pollutant fields requested from the air-quality API
const AIR_QUALITY_HOURLY_FIELDS: &str =
    "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone";

/// Client for the three Open-Meteo services.
///
/// Holds the process-wide outbound connection pool; cheap to clone the
/// wrapping state, never mutated per request.
pub struct WeatherClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
    air_quality_url: String,
}

impl WeatherClient {
    /// Create a client with the configured base URLs and a bounded
    /// per-request timeout.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("Skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            air_quality_url: config.air_quality_url.clone(),
        })
    }

    /// Resolve a free-text city name to its best geocoding match.
    #[instrument(skip(self))]
    pub async fn geocode(&self, name: &str) -> Result<Location, WeatherError> {
        validate_city_name(name)?;
        let name = name.trim();

        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.geocoding_url,
            urlencoding::encode(name)
        );

        let response: openmeteo::GeocodingResponse = self.get_json(&url, "Geocoding").await?;

        let place = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::not_found("City not found"))?;

        let location = Location::from(place);
        info!(
            "Geocoded '{}' to {} ({:.4}, {:.4})",
            name, location.name, location.latitude, location.longitude
        );
        Ok(location)
    }

    /// Fetch the forecast snapshot for a coordinate pair.
    #[instrument(skip(self))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={latitude}&longitude={longitude}&timezone={}\
             &current={FORECAST_CURRENT_FIELDS}&hourly={FORECAST_HOURLY_FIELDS}\
             &daily={FORECAST_DAILY_FIELDS}&forecast_days={FORECAST_DAYS}",
            self.forecast_url,
            urlencoding::encode(timezone)
        );

        self.get_json(&url, "Forecast").await
    }

    /// Fetch the air-quality snapshot for a coordinate pair.
    #[instrument(skip(self))]
    pub async fn air_quality(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<AirQualitySnapshot, WeatherError> {
        let url = format!(
            "{}?latitude={latitude}&longitude={longitude}&timezone={}\
             &current={AIR_QUALITY_CURRENT_FIELDS}&hourly={AIR_QUALITY_HOURLY_FIELDS}",
            self.air_quality_url,
            urlencoding::encode(timezone)
        );

        self.get_json(&url, "Air quality").await
    }

    /// The aggregation workflow: geocode the city, then fetch forecast
    /// and air quality concurrently and merge the three results.
    #[instrument(skip(self))]
    pub async fn weather_bundle(&self, city: &str) -> Result<WeatherBundle, WeatherError> {
        let location = self.geocode(city).await?;
        let timezone = location.timezone_or_auto();

        let (forecast, air_quality) = tokio::try_join!(
            self.forecast(location.latitude, location.longitude, timezone),
            self.air_quality(location.latitude, location.longitude, timezone),
        )?;

        info!("Assembled weather bundle for {}", location.name);
        Ok(WeatherBundle {
            location,
            forecast,
            air_quality,
        })
    }

    /// GET a URL and deserialize its JSON body, mapping every failure
    /// mode (transport, non-2xx, parse) to an upstream error carrying
    /// the failing step's name.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        step: &str,
    ) -> Result<T, WeatherError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::upstream(format!("{step} service unavailable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::upstream(format!(
                "{step} service unavailable: HTTP {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::upstream(format!("{step} service unavailable: {e}")))
    }
}

/// Open-Meteo geocoding response structures
mod openmeteo {
    use serde::Deserialize;

    use crate::models::Location;

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodedPlace>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodedPlace {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub timezone: Option<String>,
        pub admin1: Option<String>,
        pub population: Option<u64>,
    }

    impl From<GeocodedPlace> for Location {
        fn from(place: GeocodedPlace) -> Self {
            Location {
                name: place.name,
                country: place.country,
                latitude: place.latitude,
                longitude: place.longitude,
                timezone: place.timezone,
                admin1: place.admin1,
                population: place.population,
            }
        }
    }
}
