//! Unit conversion helpers
//!
//! Deterministic, total functions over numeric input. Kept separate from
//! the categorization tables in [`crate::conditions`].

/// Convert a temperature from Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert a temperature from Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Format a Celsius temperature in the requested unit.
/// Any unit other than `F`/`f` renders Celsius.
#[must_use]
pub fn format_temperature(celsius: f64, unit: &str) -> String {
    if unit.eq_ignore_ascii_case("f") {
        format!("{:.1}°F", celsius_to_fahrenheit(celsius))
    } else {
        format!("{celsius:.1}°C")
    }
}

/// Convert wind speed from m/s to km/h
#[must_use]
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

/// Convert wind speed from m/s to mph
#[must_use]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * 2.237
}
