use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::{info, warn};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET / - service banner.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Stock analytics backend is running",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "apiProvider": "Financial Modeling Prep",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /api/health - detailed health, including an upstream probe.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    info!("GET /api/health - Health check");

    let fmp_status = match state.provider.company_profile("AAPL").await {
        Ok(_) => "healthy",
        Err(e) => {
            warn!("Upstream health probe failed: {}", e);
            "unhealthy"
        }
    };

    Json(serde_json::json!({
        "apiStatus": "healthy",
        "fmpStatus": fmp_status,
        "version": env!("CARGO_PKG_VERSION"),
        "apiProvider": "Financial Modeling Prep",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
