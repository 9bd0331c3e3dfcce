//! Adapters for the third-party lookups the model depends on: address
//! geocoding and building solar potential.

pub mod geocoding;
pub mod solar_potential;

pub use geocoding::*;
pub use solar_potential::*;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::domain::Coordinates;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0} API key is not configured")]
    MissingApiKey(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{service} API error: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("{service} request failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    fn http(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| ProviderError::Http { service, source }
    }
}

pub(crate) fn http_client(timeout_seconds: u64) -> reqwest::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("solcial/0.1"));
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.max(1)))
        .default_headers(headers)
        .build()
}

pub(crate) fn require_api_key<'a>(
    key: &'a str,
    service: &'static str,
) -> Result<&'a str, ProviderError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ProviderError::MissingApiKey(service));
    }
    Ok(key)
}

pub(crate) fn check_coordinates(c: Coordinates) -> Result<(), ProviderError> {
    let valid = c.latitude.is_finite()
        && c.longitude.is_finite()
        && (-90.0..=90.0).contains(&c.latitude)
        && (-180.0..=180.0).contains(&c.longitude);
    if !valid {
        return Err(ProviderError::InvalidInput(format!(
            "latitude and longitude must be valid coordinates, got ({}, {})",
            c.latitude, c.longitude
        )));
    }
    Ok(())
}

/// Google APIs error envelope: `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`.
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: Option<String>,
}

/// Best-effort message extraction from a non-2xx Google response body.
fn google_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorEnvelope>(body) {
        Ok(GoogleErrorEnvelope {
            error: GoogleErrorBody { message: Some(m) },
        }) => format!("HTTP {status}: {m}"),
        _ => format!("HTTP {status}"),
    }
}
