//! Error types and HTTP mapping for the Skycast API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the Skycast application.
///
/// Display renders the bare message because it is sent verbatim to
/// clients as the `error` field of the JSON error body.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Malformed or missing request parameter
    #[error("{message}")]
    InvalidInput { message: String },

    /// Geocoding returned no match for the requested city
    #[error("{message}")]
    NotFound { message: String },

    /// Upstream provider failure: network error, non-2xx status or
    /// malformed JSON
    #[error("{message}")]
    Upstream { message: String },
}

impl WeatherError {
    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            WeatherError::NotFound { .. } => StatusCode::NOT_FOUND,
            WeatherError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::upstream(format!("Weather service unavailable: {err}"))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
