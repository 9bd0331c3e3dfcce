use anyhow::Result;
use axum::Router;
use solcial::{api, config::Config, service::AppState, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments set the variables directly
    let _ = dotenvy::dotenv();

    let cfg = Config::load()?;
    telemetry::init_tracing(&cfg.telemetry);

    let app_state = AppState::new(cfg.clone())?;

    #[allow(unused_mut)]
    let mut app: Router = api::router(app_state, &cfg);

    #[cfg(feature = "swagger")]
    {
        app = api::with_swagger(app);
    }

    #[cfg(feature = "metrics")]
    {
        app = api::with_metrics(app);
    }

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0, the API is reachable from the network");
    }

    info!(
        %addr,
        panel_price = cfg.tariff.panel_price,
        energy_cost = cfg.tariff.energy_cost,
        "starting SOLCial API server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
