use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Instant};
use strum::VariantNames;
use validator::{Validate, ValidationError};

use crate::{
    api::{error::ApiError, response::ApiResponse},
    domain::{Coordinates, RequiredQuality, SolarPotential},
    model::MonthlySamples,
    service::{AppState, SolarMetricsOutcome, SolarMetricsQuery},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/coordinates", get(get_coordinates))
        .route("/solar-potential", get(get_solar_potential))
        .route("/solar-metrics", post(post_solar_metrics))
        .with_state(state)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg_attr(feature = "swagger", derive(utoipa::IntoParams))]
#[derive(Debug, Deserialize, Validate)]
pub struct CoordinatesQuery {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "O campo 'address' é obrigatório"))]
    pub address: String,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesResponse {
    pub formatted_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// GET /api/v1/coordinates?address=...
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/api/v1/coordinates",
    params(CoordinatesQuery),
    responses(
        (status = 200, description = "Address resolved", body = CoordinatesResponse),
        (status = 400, description = "Missing address"),
        (status = 404, description = "Address not found"),
    )
))]
pub async fn get_coordinates(
    State(st): State<AppState>,
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
) -> Result<Json<CoordinatesResponse>, ApiError> {
    let Query(q) = query?;
    q.validate()?;

    let geocoded = st.advisor.coordinates(q.address.trim()).await?;
    Ok(Json(CoordinatesResponse {
        formatted_address: geocoded.formatted_address,
        latitude: geocoded.location.latitude,
        longitude: geocoded.location.longitude,
    }))
}

#[cfg_attr(feature = "swagger", derive(utoipa::IntoParams))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPotentialQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// LOW, MEDIUM or HIGH (case-insensitive)
    pub required_quality: Option<String>,
}

impl SolarPotentialQuery {
    fn parse(&self) -> Result<(Coordinates, Option<RequiredQuality>), ApiError> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ApiError::ValidationError(
                "Latitude e longitude são obrigatórios".to_string(),
            ));
        };

        let quality = match self.required_quality.as_deref() {
            None => None,
            Some(raw) => Some(RequiredQuality::from_str(raw.trim()).map_err(|_| {
                ApiError::ValidationError(format!(
                    "Qualidade inválida. Use: {}",
                    RequiredQuality::VARIANTS.join(", ")
                ))
            })?),
        };

        Ok((Coordinates::new(latitude, longitude), quality))
    }
}

/// GET /api/v1/solar-potential?latitude=..&longitude=..
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/api/v1/solar-potential",
    params(SolarPotentialQuery),
    responses(
        (status = 200, description = "Building solar potential", body = SolarPotential),
        (status = 400, description = "Missing or invalid coordinates"),
        (status = 502, description = "Solar API failure"),
    )
))]
pub async fn get_solar_potential(
    State(st): State<AppState>,
    query: Result<Query<SolarPotentialQuery>, QueryRejection>,
) -> Result<ApiResponse<SolarPotential>, ApiError> {
    let Query(q) = query?;
    let (location, quality) = q.parse()?;

    let start = Instant::now();
    let potential = st.advisor.solar_potential(location, quality).await?;

    Ok(ApiResponse::success(potential).with_duration(start.elapsed().as_millis() as u64))
}

fn default_num_panels() -> u32 {
    1
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SolarMetricsRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "O campo 'address' é obrigatório"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(
        equal = 3,
        message = "O campo 'energyConsumptionKwh' deve ser uma lista com 3 valores"
    ))]
    pub energy_consumption_kwh: Vec<f64>,

    #[serde(default)]
    #[validate(length(equal = 3, message = "O campo 'spentMoney' deve ser uma lista com 3 valores"))]
    pub spent_money: Vec<f64>,

    #[serde(default = "default_num_panels")]
    #[validate(range(min = 1, message = "O campo 'numPanels' deve ser um inteiro positivo"))]
    pub num_panels: u32,
}

fn samples(values: &[f64]) -> Result<MonthlySamples, ApiError> {
    MonthlySamples::try_from(values)
        .map_err(|_| ApiError::InternalError("sample length checked by validation".to_string()))
}

impl TryFrom<SolarMetricsRequest> for SolarMetricsQuery {
    type Error = ApiError;

    fn try_from(req: SolarMetricsRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        Ok(SolarMetricsQuery {
            energy_consumption_kwh: samples(&req.energy_consumption_kwh)?,
            spent_money: samples(&req.spent_money)?,
            address: req.address.trim().to_string(),
            num_panels: req.num_panels,
        })
    }
}

/// POST /api/v1/solar-metrics
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/v1/solar-metrics",
    request_body = SolarMetricsRequest,
    responses(
        (status = 200, description = "Ten-year financial and carbon projection", body = SolarMetricsOutcome),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Address or building not found"),
        (status = 502, description = "Upstream provider failure"),
    )
))]
pub async fn post_solar_metrics(
    State(st): State<AppState>,
    payload: Result<Json<SolarMetricsRequest>, JsonRejection>,
) -> Result<Json<SolarMetricsOutcome>, ApiError> {
    let Json(req) = payload?;
    let query = SolarMetricsQuery::try_from(req)?;

    let outcome = st.advisor.solar_metrics(&query).await?;
    Ok(Json(outcome))
}
