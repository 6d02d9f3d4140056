//! Threshold tables for weather condition labels
//!
//! One canonical table per function. Wind direction uses the 16-point
//! compass with 22.5° buckets centered on each point; the AQI tables use
//! the 6-bucket European AQI scale.

/// The 16 compass points, clockwise from north
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Compass label for a wind direction in degrees.
///
/// Input is normalized into `[0, 360)` first, so negative and >360 values
/// are valid. Non-finite input falls back to `"N"` instead of panicking.
#[must_use]
pub fn wind_direction(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "N";
    }
    let normalized = degrees.rem_euclid(360.0);
    // Shift by half a bucket so each point is centered on its heading
    let index = ((normalized + 11.25) / 22.5) as usize % 16;
    COMPASS_POINTS[index]
}

/// Descriptive category for a wind speed in km/h
#[must_use]
pub fn wind_speed_category(kmh: f64) -> &'static str {
    if kmh < 1.0 {
        "Calm"
    } else if kmh < 12.0 {
        "Light"
    } else if kmh < 30.0 {
        "Moderate"
    } else if kmh < 50.0 {
        "Strong"
    } else {
        "Very Strong"
    }
}

/// European AQI category label
#[must_use]
pub fn categorize_aqi(index: i64) -> &'static str {
    match index {
        i64::MIN..=20 => "Good",
        21..=40 => "Fair",
        41..=60 => "Moderate",
        61..=80 => "Poor",
        81..=100 => "Very Poor",
        _ => "Extremely Poor",
    }
}

/// Display color for a European AQI value
#[must_use]
pub fn aqi_color(index: i64) -> &'static str {
    match index {
        i64::MIN..=20 => "#50f550",
        21..=40 => "#50ccaa",
        41..=60 => "#f5cf50",
        61..=80 => "#ff5050",
        81..=100 => "#960032",
        _ => "#7d2181",
    }
}

/// Health recommendation for a European AQI value
#[must_use]
pub fn aqi_recommendation(index: i64) -> &'static str {
    match index {
        i64::MIN..=20 => "Good conditions for outdoor activities",
        21..=40 => "Good air quality overall",
        41..=60 => "Sensitive groups may experience effects",
        61..=80 => "Members of general public may feel effects",
        _ => "Everyone may begin to feel effects. Limit outdoor activities",
    }
}

/// Category label for a UV index
#[must_use]
pub fn uv_category(index: f64) -> &'static str {
    if !index.is_finite() {
        return "Unknown";
    }
    if index <= 2.0 {
        "Low"
    } else if index <= 5.0 {
        "Moderate"
    } else if index <= 7.0 {
        "High"
    } else if index <= 10.0 {
        "Very High"
    } else {
        "Extreme"
    }
}
