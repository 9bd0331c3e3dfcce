use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

use super::location::Coordinates;

/// One candidate panel placement with its nominal DC yield.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    #[serde(default)]
    pub yearly_energy_dc_kwh: f64,
}

/// Imagery quality the solar-potential lookup must meet.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    VariantNames,
    Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequiredQuality {
    Low,
    Medium,
    #[default]
    High,
}

// Case-insensitive, same as the query-string parse.
impl<'de> Deserialize<'de> for RequiredQuality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RequiredQuality::from_str(raw.trim()).map_err(|_| {
            serde::de::Error::unknown_variant(&raw, RequiredQuality::VARIANTS)
        })
    }
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingStats {
    pub area_meters2: f64,
    pub center: Option<Coordinates>,
    #[cfg_attr(feature = "swagger", schema(value_type = Option<Object>))]
    pub imagery_date: Option<serde_json::Value>,
    pub imagery_quality: Option<String>,
}

/// Solar potential of the building closest to a point.
///
/// `solar_panels` keeps the provider's order; the model reads it front to
/// back. The analysis lists are passed through untouched for the dashboards.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPotential {
    pub location: Coordinates,
    pub address: Option<String>,
    pub max_array_panels_count: u32,
    pub max_array_area_meters2: f64,
    pub max_sunshine_hours_per_year: f64,
    pub carbon_offset_factor_kg_per_mwh: f64,
    pub solar_panels: Vec<PanelConfig>,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<Object>))]
    pub solar_panel_configs: Vec<serde_json::Value>,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<Object>))]
    pub roof_segment_stats: Vec<serde_json::Value>,
    #[cfg_attr(feature = "swagger", schema(value_type = Vec<Object>))]
    pub financial_analyses: Vec<serde_json::Value>,
    pub building_stats: BuildingStats,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_quality_parse() {
        assert_eq!(RequiredQuality::from_str("high").unwrap(), RequiredQuality::High);
        assert_eq!(RequiredQuality::from_str("Medium").unwrap(), RequiredQuality::Medium);
        assert_eq!(RequiredQuality::from_str("LOW").unwrap(), RequiredQuality::Low);
        assert!(RequiredQuality::from_str("ULTRA").is_err());
    }

    #[test]
    fn test_required_quality_display() {
        assert_eq!(RequiredQuality::default().to_string(), "HIGH");
        assert_eq!(RequiredQuality::Medium.to_string(), "MEDIUM");
        assert_eq!(RequiredQuality::VARIANTS, &["LOW", "MEDIUM", "HIGH"]);
    }

    #[test]
    fn test_required_quality_deserialize_ignores_case() {
        let q: RequiredQuality = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(q, RequiredQuality::Medium);
        let q: RequiredQuality = serde_json::from_str(r#""LOW""#).unwrap();
        assert_eq!(q, RequiredQuality::Low);
        assert!(serde_json::from_str::<RequiredQuality>(r#""ultra""#).is_err());
        assert_eq!(serde_json::to_string(&RequiredQuality::Medium).unwrap(), r#""MEDIUM""#);
    }

    #[test]
    fn test_panel_config_wire_name() {
        let panel: PanelConfig = serde_json::from_str(r#"{"yearlyEnergyDcKwh": 455.2}"#).unwrap();
        assert_eq!(panel.yearly_energy_dc_kwh, 455.2);
    }
}
