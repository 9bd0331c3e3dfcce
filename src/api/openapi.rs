use utoipa::OpenApi;

use crate::api::health::{ComponentHealth, HealthChecks, HealthResponse, ServiceInfo};
use crate::api::v1::{CoordinatesResponse, SolarMetricsRequest};
use crate::domain::{
    BuildingStats, Coordinates, PanelConfig, RequiredQuality, SolarPotential,
};
use crate::model::{CarbonImpactTenYears, SolarMetricsReport};
use crate::service::SolarMetricsOutcome;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::root,
        crate::api::health::health_check,
        crate::api::v1::get_coordinates,
        crate::api::v1::get_solar_potential,
        crate::api::v1::post_solar_metrics,
    ),
    components(
        schemas(
            ServiceInfo, HealthResponse, HealthChecks, ComponentHealth,
            CoordinatesResponse, SolarMetricsRequest, SolarMetricsOutcome,
            SolarMetricsReport, CarbonImpactTenYears,
            SolarPotential, BuildingStats, PanelConfig, Coordinates, RequiredQuality,
        )
    ),
    tags((name = "solcial", description = "SOLCial solar return API v1"))
)]
pub struct ApiDoc;
