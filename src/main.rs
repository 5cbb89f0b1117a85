mod app;
mod config;
mod errors;
mod external;
mod format;
mod logging;
mod models;
mod routes;
mod sample;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::external::fmp::FmpProvider;
use crate::services::generation::FetchLedger;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Config is validated before anything else: a missing API key is a
    // startup error, not a silent fallback.
    let config = Config::from_env()?;

    logging::init_logging(logging::LoggingConfig::from_env())?;

    if config.fmp_api_key == "demo" {
        tracing::warn!("FMP_API_KEY is the shared demo key; expect tight upstream quotas");
    }

    let provider = Arc::new(FmpProvider::new(
        config.fmp_api_key.clone(),
        config.fmp_base_url.clone(),
    ));

    let state = AppState {
        provider,
        fetches: FetchLedger::new(),
    };
    let app = app::create_app(state, &config.frontend_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Stock analytics backend running at http://{}/", addr);
    tracing::info!("📋 Health check available at http://{}/api/health", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
