use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::service::AppState;

/// GET / banner
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    endpoints: Vec<&'static str>,
}

/// Health check response
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    geocoding: ComponentHealth,
    solar: ComponentHealth,
}

/// Health status of an upstream dependency
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn configured() -> Self {
        Self {
            status: "configured",
            error: None,
        }
    }

    fn unconfigured(error: String) -> Self {
        Self {
            status: "unconfigured",
            error: Some(error),
        }
    }

    fn for_api_key(key: &str, name: &str) -> Self {
        if key.trim().is_empty() {
            Self::unconfigured(format!("{name} API key is not set"))
        } else {
            Self::configured()
        }
    }
}

#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = ServiceInfo))
))]
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "SOLCial API Server is running!",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "/health",
            "/api/v1/coordinates",
            "/api/v1/solar-potential",
            "/api/v1/solar-metrics",
        ],
    })
}

/// GET /health
///
/// Always 200 while the process serves requests. The checks only report
/// whether the upstream API keys are present; they do not call upstream.
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse))
))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "OK",
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        checks: HealthChecks {
            geocoding: ComponentHealth::for_api_key(&state.cfg.geocoding.api_key, "Geocoding"),
            solar: ComponentHealth::for_api_key(&state.cfg.solar.api_key, "Solar"),
        },
    };

    (StatusCode::OK, Json(response))
}
