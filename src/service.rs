use anyhow::Result;
use serde::Serialize;
use std::{sync::Arc, time::Instant};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Coordinates, GeocodedAddress, RequiredQuality, SolarPotential};
use crate::model::{compute_report, MetricsError, MonthlySamples, SolarMetricsReport, SolarTariff};
use crate::providers::{
    Geocoder, GoogleGeocoder, GoogleSolarClient, ProviderError, SolarPotentialProvider,
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub advisor: Arc<SolarAdvisor>,
    pub started_at: Instant,
}

impl AppState {
    /// Wires the Google-backed providers from configuration.
    pub fn new(cfg: Config) -> Result<Self> {
        if cfg.geocoding.api_key.trim().is_empty() {
            warn!("geocoding API key is not configured, address lookups will fail");
        }
        if cfg.solar.api_key.trim().is_empty() {
            warn!("solar API key is not configured, solar potential lookups will fail");
        }

        let geocoder = Arc::new(GoogleGeocoder::new(&cfg.geocoding)?);
        let solar = Arc::new(GoogleSolarClient::new(&cfg.solar)?);
        Ok(Self::with_providers(cfg, geocoder, solar))
    }

    pub fn with_providers(
        cfg: Config,
        geocoder: Arc<dyn Geocoder>,
        solar: Arc<dyn SolarPotentialProvider>,
    ) -> Self {
        let advisor = Arc::new(SolarAdvisor {
            geocoder,
            solar,
            tariff: cfg.tariff,
            quality: cfg.solar.required_quality,
        });
        Self {
            cfg,
            advisor,
            started_at: Instant::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("requested {requested} panels but the roof supports at most {max}")]
    TooManyPanels { requested: u32, max: u32 },
}

/// Already-validated inputs for one solar metrics estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarMetricsQuery {
    pub address: String,
    pub energy_consumption_kwh: MonthlySamples,
    pub spent_money: MonthlySamples,
    pub num_panels: u32,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarMetricsOutcome {
    pub formatted_address: String,
    pub max_panels: u32,
    pub solar_metrics: SolarMetricsReport,
}

/// Chains geocoding, the solar-potential lookup and the return model.
pub struct SolarAdvisor {
    geocoder: Arc<dyn Geocoder>,
    solar: Arc<dyn SolarPotentialProvider>,
    tariff: SolarTariff,
    quality: RequiredQuality,
}

impl SolarAdvisor {
    pub async fn coordinates(&self, address: &str) -> Result<GeocodedAddress, AdvisorError> {
        Ok(self.geocoder.geocode(address).await?)
    }

    pub async fn solar_potential(
        &self,
        location: Coordinates,
        quality: Option<RequiredQuality>,
    ) -> Result<SolarPotential, AdvisorError> {
        let quality = quality.unwrap_or(self.quality);
        Ok(self.solar.solar_potential(location, quality).await?)
    }

    pub async fn solar_metrics(
        &self,
        query: &SolarMetricsQuery,
    ) -> Result<SolarMetricsOutcome, AdvisorError> {
        let geocoded = self.geocoder.geocode(&query.address).await?;
        let potential = self
            .solar
            .solar_potential(geocoded.location, self.quality)
            .await?;

        // The roof maximum is enforced here; the model itself accepts any count.
        let max = potential.max_array_panels_count;
        if max > 0 && query.num_panels > max {
            return Err(AdvisorError::TooManyPanels {
                requested: query.num_panels,
                max,
            });
        }

        let report = compute_report(
            Some(&potential),
            query.num_panels,
            &query.energy_consumption_kwh,
            &query.spent_money,
            &self.tariff,
        )?;

        info!(
            formatted_address = %geocoded.formatted_address,
            panels = query.num_panels,
            max_panels = max,
            payback_years = report.time_for_investment_recovery,
            "solar metrics estimated"
        );

        Ok(SolarMetricsOutcome {
            formatted_address: geocoded.formatted_address,
            max_panels: max,
            solar_metrics: report,
        })
    }
}
