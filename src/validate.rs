//! Request input validators
//!
//! Validators return `WeatherError::InvalidInput` with the exact message
//! the HTTP layer sends back, so handlers can forward errors unchanged.

use crate::error::WeatherError;

/// Longest city name accepted by the geocoding endpoints
pub const MAX_CITY_NAME_LEN: usize = 100;

/// Validate a free-text city name.
pub fn validate_city_name(name: &str) -> Result<(), WeatherError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(WeatherError::invalid_input("City name is required"));
    }
    if trimmed.chars().count() < 2 {
        return Err(WeatherError::invalid_input(
            "City name must be at least 2 characters",
        ));
    }
    if trimmed.chars().count() > MAX_CITY_NAME_LEN {
        return Err(WeatherError::invalid_input("City name is too long"));
    }
    Ok(())
}

/// Parse and validate a latitude/longitude pair given as raw query strings.
/// Returns the parsed coordinates on success.
pub fn parse_coordinates(
    lat: Option<&str>,
    lon: Option<&str>,
) -> Result<(f64, f64), WeatherError> {
    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) if !lat.trim().is_empty() && !lon.trim().is_empty() => (lat, lon),
        _ => {
            return Err(WeatherError::invalid_input(
                "Latitude and longitude are required",
            ));
        }
    };

    let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
        return Err(WeatherError::invalid_input(
            "Invalid coordinate format. Must be numeric values",
        ));
    };

    validate_coordinates(lat, lon)?;
    Ok((lat, lon))
}

/// Validate already-parsed coordinates against their legal ranges.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), WeatherError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(WeatherError::invalid_input(
            "Invalid coordinate format. Must be numeric values",
        ));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(WeatherError::invalid_input(
            "Latitude must be between -90 and 90",
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(WeatherError::invalid_input(
            "Longitude must be between -180 and 180",
        ));
    }
    Ok(())
}
