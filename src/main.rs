use anyhow::Result;
use grid_guardian::{api, config, dashboard, telemetry, weather::openweather::usable_api_key};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; configuration may come from the real environment
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::load()?;

    if usable_api_key(cfg.weather.api_key.as_deref()).is_none() {
        warn!(
            city = %cfg.weather.city,
            "GRID_GUARDIAN__WEATHER__API_KEY not set; weather panel runs in demo mode"
        );
    }

    let app_state = dashboard::AppState::new(cfg.clone())?;
    let app = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;
    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0 - dashboard will be reachable from the network");
    }

    info!(%addr, city = %cfg.weather.city, "starting Grid Guardian");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
