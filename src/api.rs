//! HTTP API: router and handlers
//!
//! Every response is JSON. Numeric query parameters arrive as raw strings
//! and are parsed by hand so that malformed input produces the same
//! `{"error": ...}` body shape as every other failure.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions;
use crate::error::WeatherError;
use crate::models::{AirQualitySnapshot, ForecastSnapshot, Location, WeatherBundle};
use crate::units;
use crate::validate::{parse_coordinates, validate_city_name};
use crate::weather::WeatherClient;

/// Shared state for all handlers: the one outbound client the process owns
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    #[must_use]
    pub fn new(weather: WeatherClient) -> Self {
        Self {
            weather: Arc::new(weather),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/geocode", get(geocode_city))
        .route("/forecast", get(get_forecast))
        .route("/air-quality", get(get_air_quality))
        .route("/validate/city", get(validate_city))
        .route("/validate/coordinates", get(validate_coordinates))
        .route("/temperature/format", get(temperature_format))
        .route("/temperature/convert/to-fahrenheit", get(to_fahrenheit))
        .route("/temperature/convert/to-celsius", get(to_celsius))
        .route("/wind/direction", get(wind_direction))
        .route("/wind/speed", get(wind_speed))
        .route("/aqi/categorize", get(categorize_aqi))
        .route("/uv/categorize", get(categorize_uv))
        .route("/health", get(health))
        .with_state(state)
}

/// Parse a required numeric query parameter, with a JSON-friendly error.
fn require_number(value: Option<&str>, name: &str) -> Result<f64, WeatherError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| WeatherError::invalid_input(format!("'{name}' must be a number")))
}

// --- aggregation & upstream pass-through -------------------------------

#[derive(Deserialize)]
struct CityQuery {
    city: Option<String>,
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<WeatherBundle>, WeatherError> {
    let city = query.city.unwrap_or_default();
    let bundle = state.weather.weather_bundle(&city).await?;
    Ok(Json(bundle))
}

#[derive(Deserialize)]
struct NameQuery {
    name: Option<String>,
}

async fn geocode_city(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Location>, WeatherError> {
    let name = query.name.unwrap_or_default();
    let location = state.weather.geocode(&name).await?;
    Ok(Json(location))
}

#[derive(Deserialize)]
struct CoordinatesQuery {
    lat: Option<String>,
    lon: Option<String>,
    timezone: Option<String>,
}

async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<ForecastSnapshot>, WeatherError> {
    let (lat, lon) = parse_coordinates(query.lat.as_deref(), query.lon.as_deref())?;
    let timezone = query.timezone.as_deref().unwrap_or("auto");
    let snapshot = state.weather.forecast(lat, lon, timezone).await?;
    Ok(Json(snapshot))
}

async fn get_air_quality(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<AirQualitySnapshot>, WeatherError> {
    let (lat, lon) = parse_coordinates(query.lat.as_deref(), query.lon.as_deref())?;
    let timezone = query.timezone.as_deref().unwrap_or("auto");
    let snapshot = state.weather.air_quality(lat, lon, timezone).await?;
    Ok(Json(snapshot))
}

// --- validation --------------------------------------------------------

#[derive(Serialize)]
struct CityValidation {
    valid: bool,
    error: Option<String>,
    input: String,
}

async fn validate_city(Query(query): Query<NameQuery>) -> Json<CityValidation> {
    let input = query.name.unwrap_or_default();
    let error = validate_city_name(&input).err().map(|e| e.to_string());
    Json(CityValidation {
        valid: error.is_none(),
        error,
        input,
    })
}

#[derive(Serialize)]
struct CoordinatesValidation {
    valid: bool,
    error: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
}

async fn validate_coordinates(
    Query(query): Query<CoordinatesQuery>,
) -> Json<CoordinatesValidation> {
    let error = parse_coordinates(query.lat.as_deref(), query.lon.as_deref())
        .err()
        .map(|e| e.to_string());
    Json(CoordinatesValidation {
        valid: error.is_none(),
        error,
        latitude: query.lat,
        longitude: query.lon,
    })
}

// --- temperature utilities ---------------------------------------------

#[derive(Deserialize)]
struct TemperatureQuery {
    celsius: Option<String>,
    fahrenheit: Option<String>,
    unit: Option<String>,
}

#[derive(Serialize)]
struct FormattedTemperature {
    input: f64,
    unit: String,
    formatted: String,
}

async fn temperature_format(
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<FormattedTemperature>, WeatherError> {
    let celsius = require_number(query.celsius.as_deref(), "celsius")?;
    let unit = query.unit.unwrap_or_else(|| "C".to_string());
    let formatted = units::format_temperature(celsius, &unit);
    Ok(Json(FormattedTemperature {
        input: celsius,
        unit,
        formatted,
    }))
}

#[derive(Serialize)]
struct TemperatureConversion {
    celsius: f64,
    fahrenheit: f64,
}

async fn to_fahrenheit(
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<TemperatureConversion>, WeatherError> {
    let celsius = require_number(query.celsius.as_deref(), "celsius")?;
    Ok(Json(TemperatureConversion {
        celsius,
        fahrenheit: units::celsius_to_fahrenheit(celsius),
    }))
}

async fn to_celsius(
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<TemperatureConversion>, WeatherError> {
    let fahrenheit = require_number(query.fahrenheit.as_deref(), "fahrenheit")?;
    Ok(Json(TemperatureConversion {
        celsius: units::fahrenheit_to_celsius(fahrenheit),
        fahrenheit,
    }))
}

// --- wind utilities ----------------------------------------------------

#[derive(Deserialize)]
struct WindQuery {
    degrees: Option<String>,
    mps: Option<String>,
}

#[derive(Serialize)]
struct WindDirection {
    degrees: f64,
    direction: &'static str,
}

async fn wind_direction(
    Query(query): Query<WindQuery>,
) -> Result<Json<WindDirection>, WeatherError> {
    let degrees = require_number(query.degrees.as_deref(), "degrees")?;
    Ok(Json(WindDirection {
        degrees,
        direction: conditions::wind_direction(degrees),
    }))
}

#[derive(Serialize)]
struct WindSpeed {
    mps: f64,
    kmh: f64,
    mph: f64,
    category: &'static str,
}

async fn wind_speed(Query(query): Query<WindQuery>) -> Result<Json<WindSpeed>, WeatherError> {
    let mps = require_number(query.mps.as_deref(), "mps")?;
    let kmh = units::mps_to_kmh(mps);
    Ok(Json(WindSpeed {
        mps,
        kmh,
        mph: units::mps_to_mph(mps),
        category: conditions::wind_speed_category(kmh),
    }))
}

// --- air quality & UV --------------------------------------------------

#[derive(Deserialize)]
struct IndexQuery {
    index: Option<String>,
}

#[derive(Serialize)]
struct AqiCategory {
    index: i64,
    category: &'static str,
    color: &'static str,
    recommendation: &'static str,
}

async fn categorize_aqi(Query(query): Query<IndexQuery>) -> Result<Json<AqiCategory>, WeatherError> {
    let index = require_number(query.index.as_deref(), "index")?.round() as i64;
    Ok(Json(AqiCategory {
        index,
        category: conditions::categorize_aqi(index),
        color: conditions::aqi_color(index),
        recommendation: conditions::aqi_recommendation(index),
    }))
}

#[derive(Serialize)]
struct UvCategory {
    index: f64,
    category: &'static str,
}

async fn categorize_uv(Query(query): Query<IndexQuery>) -> Result<Json<UvCategory>, WeatherError> {
    let index = require_number(query.index.as_deref(), "index")?;
    Ok(Json(UvCategory {
        index,
        category: conditions::uv_category(index),
    }))
}

// --- health ------------------------------------------------------------

#[derive(Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: "Skycast API",
        timestamp: Utc::now(),
    })
}
