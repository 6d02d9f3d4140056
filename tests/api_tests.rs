//! End-to-end tests for the Skycast HTTP surface
//!
//! The full application router is exercised through `oneshot` requests,
//! with the three Open-Meteo upstreams replaced by a wiremock server.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast::config::AppConfig;
use skycast::web;

fn app_for(server: &MockServer) -> Router {
    let config = AppConfig {
        geocoding_url: format!("{}/geocode", server.uri()),
        forecast_url: format!("{}/forecast", server.uri()),
        air_quality_url: format!("{}/air-quality", server.uri()),
        ..AppConfig::default()
    };
    web::app(&config).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn mount_geocode_hit(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": "Montreal",
                "latitude": 45.50884,
                "longitude": -73.58781,
                "country": "Canada",
                "timezone": "America/Toronto",
                "admin1": "Quebec",
                "population": 1704694
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn weather_rejects_short_city_name() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api/weather?city=L").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "City name must be at least 2 characters");
}

#[tokio::test]
async fn weather_unknown_city_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/weather?city=Nonexistentplacexyz123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "City not found");
}

#[tokio::test]
async fn weather_happy_path_merges_bundle() {
    let server = MockServer::start().await;
    mount_geocode_hit(&server).await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "America/Toronto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"temperature_2m": -12.5, "uv_index": 1.0},
            "current_units": {"temperature_2m": "°C"},
            "hourly": {"time": ["2026-08-31T12:00"], "temperature_2m": [-12.5]},
            "daily": {"time": ["2026-08-31"], "temperature_2m_max": [-8.0]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .and(query_param("timezone", "America/Toronto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"european_aqi": 17},
            "current_units": {"european_aqi": "EAQI"}
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/weather?city=Montreal").await;
    assert_eq!(status, StatusCode::OK);

    // Location mirrors the first geocoding match
    assert_eq!(body["location"]["name"], "Montreal");
    assert_eq!(body["location"]["country"], "Canada");
    assert_eq!(body["location"]["timezone"], "America/Toronto");

    // Forecast and air quality pass through untouched
    assert_eq!(body["forecast"]["current"]["temperature_2m"], -12.5);
    assert_eq!(body["forecast"]["daily"]["temperature_2m_max"][0], -8.0);
    assert_eq!(body["air_quality"]["current"]["european_aqi"], 17);
}

#[tokio::test]
async fn weather_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    mount_geocode_hit(&server).await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/weather?city=Montreal").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Forecast service unavailable")
    );
}

#[tokio::test]
async fn geocode_endpoint_returns_location() {
    let server = MockServer::start().await;
    mount_geocode_hit(&server).await;

    let (status, body) = get(app_for(&server), "/api/geocode?name=Montreal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Montreal");
    assert_eq!(body["admin1"], "Quebec");
    assert_eq!(body["population"], 1704694);
}

#[tokio::test]
async fn geocode_endpoint_rejects_missing_name() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api/geocode").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "City name is required");
}

#[tokio::test]
async fn forecast_endpoint_passes_through_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "45.5"))
        .and(query_param("longitude", "-73.5"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hourly": {"time": ["2026-08-31T12:00"], "uv_index": [6.1]}
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/forecast?lat=45.5&lon=-73.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hourly"]["uv_index"][0], 6.1);
    // Sections the upstream omitted come back as empty objects
    assert_eq!(body["daily"], json!({}));
}

#[tokio::test]
async fn air_quality_endpoint_validates_coordinates() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api/air-quality?lat=45&lon=200").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Longitude must be between -180 and 180");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "Skycast API");
}

#[tokio::test]
async fn utility_endpoints_work_end_to_end() {
    let server = MockServer::start().await;

    let (status, body) = get(app_for(&server), "/api/wind/direction?degrees=180").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["direction"], "S");

    let (status, body) = get(app_for(&server), "/api/aqi/categorize?index=45").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Moderate");

    let (status, body) = get(
        app_for(&server),
        "/api/temperature/convert/to-celsius?fahrenheit=212",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["celsius"], 100.0);
}
