use anyhow::Result;
use axum::Router;
use tracing::{info, warn};
use ups_path_trainer::{api, config::Config, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cfg = Config::load()?;

    if cfg.tutor.api_key.is_empty() {
        warn!("no tutor API key configured - Q&A and quizzes will answer with fallbacks");
    }

    let app_state = api::AppState::new(cfg.clone());
    let app: Router = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            For a classroom install, bind to 127.0.0.1 unless behind a reverse proxy."
        );
    }

    info!(%addr, "starting UPS path trainer");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
