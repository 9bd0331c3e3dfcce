use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{google_error_message, http_client, require_api_key, ProviderError};
use crate::config::GeocodingConfig;
use crate::domain::{Coordinates, GeocodedAddress};

const SERVICE: &str = "Geocoding";

/// Resolves a free-text address to a point.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeocodedAddress, ProviderError>;
}

/// Google Maps Geocoding API client.
#[derive(Clone)]
pub struct GoogleGeocoder {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GoogleGeocoder {
    pub fn new(cfg: &GeocodingConfig) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            client: http_client(cfg.http_timeout_seconds)?,
        })
    }

    fn url(&self) -> String {
        format!("{}/maps/api/geocode/json", self.base_url)
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeocodedAddress, ProviderError> {
        let key = require_api_key(&self.api_key, SERVICE)?;

        debug!(address, "geocoding address");

        let resp = self
            .client
            .get(self.url())
            .query(&[("address", address), ("key", key)])
            .send()
            .await
            .map_err(ProviderError::http(SERVICE))?;

        let status = resp.status();
        let body = resp.text().await.map_err(ProviderError::http(SERVICE))?;
        if !status.is_success() {
            warn!(%status, "geocoding API returned an error status");
            return Err(ProviderError::Upstream {
                service: SERVICE,
                message: google_error_message(status, &body),
            });
        }

        let raw: RawGeocodeResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Upstream {
                service: SERVICE,
                message: format!("unexpected response body: {e}"),
            })?;

        match raw.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => {
                return Err(ProviderError::NotFound(format!(
                    "no coordinates found for address '{address}'"
                )))
            }
            other => {
                return Err(ProviderError::Upstream {
                    service: SERVICE,
                    message: raw
                        .error_message
                        .unwrap_or_else(|| format!("status {other}")),
                })
            }
        }

        let first = raw.results.into_iter().next().ok_or_else(|| {
            ProviderError::NotFound(format!("no coordinates found for address '{address}'"))
        })?;

        let geocoded = GeocodedAddress {
            formatted_address: first.formatted_address,
            location: Coordinates::new(first.geometry.location.lat, first.geometry.location.lng),
        };

        info!(
            formatted_address = %geocoded.formatted_address,
            latitude = geocoded.location.latitude,
            longitude = geocoded.location.longitude,
            "address geocoded"
        );

        Ok(geocoded)
    }
}

// Google Geocoding API response structures
#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawGeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeocodeResult {
    formatted_address: String,
    geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: RawLatLng,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> GeocodingConfig {
        GeocodingConfig {
            base_url: "https://maps.example.invalid/".to_string(),
            api_key: api_key.to_string(),
            http_timeout_seconds: 5,
        }
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let geocoder = GoogleGeocoder::new(&config("key")).unwrap();
        assert_eq!(geocoder.url(), "https://maps.example.invalid/maps/api/geocode/json");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let geocoder = GoogleGeocoder::new(&config("")).unwrap();
        let err = geocoder.geocode("Rua Exemplo, 123").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey("Geocoding")));
    }

    #[test]
    fn test_parse_geocode_response() {
        let body = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Rua Exemplo, 123 - São Paulo, SP, Brasil",
                "geometry": { "location": { "lat": -23.5, "lng": -46.6 } }
            }]
        }"#;
        let raw: RawGeocodeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(raw.status, "OK");
        assert_eq!(raw.results[0].geometry.location.lng, -46.6);
    }
}
