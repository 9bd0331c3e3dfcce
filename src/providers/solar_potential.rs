use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{check_coordinates, google_error_message, http_client, require_api_key, ProviderError};
use crate::config::SolarApiConfig;
use crate::domain::{
    BoundingBox, BuildingStats, Coordinates, PanelConfig, RequiredQuality, SolarPotential,
};

const SERVICE: &str = "Solar";

/// Looks up the rooftop solar potential of the building closest to a point.
#[async_trait]
pub trait SolarPotentialProvider: Send + Sync {
    async fn solar_potential(
        &self,
        location: Coordinates,
        quality: RequiredQuality,
    ) -> Result<SolarPotential, ProviderError>;
}

/// Google Solar API `buildingInsights:findClosest` client.
#[derive(Clone)]
pub struct GoogleSolarClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GoogleSolarClient {
    pub fn new(cfg: &SolarApiConfig) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            client: http_client(cfg.http_timeout_seconds)?,
        })
    }

    fn url(&self) -> String {
        format!("{}/buildingInsights:findClosest", self.base_url)
    }
}

#[async_trait]
impl SolarPotentialProvider for GoogleSolarClient {
    async fn solar_potential(
        &self,
        location: Coordinates,
        quality: RequiredQuality,
    ) -> Result<SolarPotential, ProviderError> {
        check_coordinates(location)?;
        let key = require_api_key(&self.api_key, SERVICE)?;

        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            %quality,
            "fetching building insights"
        );

        let resp = self
            .client
            .get(self.url())
            .query(&[
                ("location.latitude", location.latitude.to_string()),
                ("location.longitude", location.longitude.to_string()),
                ("requiredQuality", quality.to_string()),
                ("key", key.to_string()),
            ])
            .send()
            .await
            .map_err(ProviderError::http(SERVICE))?;

        let status = resp.status();
        let body = resp.text().await.map_err(ProviderError::http(SERVICE))?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(format!(
                "no building with solar data near ({}, {})",
                location.latitude, location.longitude
            )));
        }
        if !status.is_success() {
            warn!(%status, "solar API returned an error status");
            return Err(ProviderError::Upstream {
                service: SERVICE,
                message: google_error_message(status, &body),
            });
        }

        let insights: RawBuildingInsights =
            serde_json::from_str(&body).map_err(|e| ProviderError::Upstream {
                service: SERVICE,
                message: format!("unexpected response body: {e}"),
            })?;

        let potential = insights.into_solar_potential(location);

        info!(
            latitude = location.latitude,
            longitude = location.longitude,
            max_panels = potential.max_array_panels_count,
            panels = potential.solar_panels.len(),
            "solar potential fetched"
        );

        Ok(potential)
    }
}

// Google Solar API response structures. Every field is optional upstream.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawBuildingInsights {
    name: Option<String>,
    center: Option<Coordinates>,
    bounding_box: Option<RawBoundingBox>,
    imagery_date: Option<serde_json::Value>,
    imagery_quality: Option<String>,
    solar_potential: Option<RawSolarPotential>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBoundingBox {
    sw: Option<Coordinates>,
    ne: Option<Coordinates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSolarPotential {
    max_array_panels_count: u32,
    max_array_area_meters2: f64,
    max_sunshine_hours_per_year: f64,
    carbon_offset_factor_kg_per_mwh: f64,
    solar_panels: Vec<PanelConfig>,
    solar_panel_configs: Vec<serde_json::Value>,
    roof_segment_stats: Vec<serde_json::Value>,
    financial_analyses: Vec<serde_json::Value>,
}

impl RawBuildingInsights {
    fn into_solar_potential(self, location: Coordinates) -> SolarPotential {
        let area_meters2 = match self.bounding_box {
            Some(RawBoundingBox {
                sw: Some(sw),
                ne: Some(ne),
            }) => BoundingBox { sw, ne }.approximate_area_m2(),
            _ => 0.0,
        };
        let sp = self.solar_potential.unwrap_or_default();

        SolarPotential {
            location,
            address: self.name,
            max_array_panels_count: sp.max_array_panels_count,
            max_array_area_meters2: sp.max_array_area_meters2,
            max_sunshine_hours_per_year: sp.max_sunshine_hours_per_year,
            carbon_offset_factor_kg_per_mwh: sp.carbon_offset_factor_kg_per_mwh,
            solar_panels: sp.solar_panels,
            solar_panel_configs: sp.solar_panel_configs,
            roof_segment_stats: sp.roof_segment_stats,
            financial_analyses: sp.financial_analyses,
            building_stats: BuildingStats {
                area_meters2,
                center: self.center,
                imagery_date: self.imagery_date,
                imagery_quality: self.imagery_quality,
            },
            fetched_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_solar_potential_keeps_panel_order() {
        let body = r#"{
            "name": "buildings/ChIJ123",
            "center": { "latitude": -23.5, "longitude": -46.6 },
            "imageryQuality": "HIGH",
            "boundingBox": {
                "sw": { "latitude": -23.5001, "longitude": -46.6001 },
                "ne": { "latitude": -23.5000, "longitude": -46.6000 }
            },
            "solarPotential": {
                "maxArrayPanelsCount": 3,
                "maxSunshineHoursPerYear": 1800.5,
                "solarPanels": [
                    { "yearlyEnergyDcKwh": 300.0, "orientation": "LANDSCAPE" },
                    { "yearlyEnergyDcKwh": 450.0 },
                    { "yearlyEnergyDcKwh": 420.0 }
                ]
            }
        }"#;
        let raw: RawBuildingInsights = serde_json::from_str(body).unwrap();
        let potential = raw.into_solar_potential(Coordinates::new(-23.5, -46.6));

        assert_eq!(potential.address.as_deref(), Some("buildings/ChIJ123"));
        assert_eq!(potential.max_array_panels_count, 3);
        let yields: Vec<f64> = potential
            .solar_panels
            .iter()
            .map(|p| p.yearly_energy_dc_kwh)
            .collect();
        assert_eq!(yields, vec![300.0, 450.0, 420.0]);
        assert!((potential.building_stats.area_meters2 - 123.21).abs() < 0.01);
        assert_eq!(potential.building_stats.imagery_quality.as_deref(), Some("HIGH"));
    }

    #[test]
    fn test_missing_solar_potential_defaults_to_zero() {
        let raw: RawBuildingInsights = serde_json::from_str("{}").unwrap();
        let potential = raw.into_solar_potential(Coordinates::new(1.0, 2.0));
        assert_eq!(potential.max_array_panels_count, 0);
        assert!(potential.solar_panels.is_empty());
        assert_eq!(potential.building_stats.area_meters2, 0.0);
    }

    #[tokio::test]
    async fn test_invalid_coordinates_rejected_before_key_check() {
        let client = GoogleSolarClient::new(&SolarApiConfig {
            base_url: "https://solar.example.invalid/v1".to_string(),
            api_key: String::new(),
            required_quality: RequiredQuality::High,
            http_timeout_seconds: 5,
        })
        .unwrap();
        let err = client
            .solar_potential(Coordinates::new(123.0, 0.0), RequiredQuality::High)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidInput(_)));
    }
}
