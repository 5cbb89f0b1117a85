use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::format;
use crate::models::{FinancialHealthScores, KeyMetricsSnapshot, Sourced};
use crate::services::facade::{self, FinancialHealthBundle};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/key-metrics/:ticker", get(get_key_metrics))
        .route("/financial-scores/:ticker", get(get_financial_scores))
        .route("/financial-health/:ticker", get(get_financial_health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetricsView {
    #[serde(flatten)]
    pub metrics: KeyMetricsSnapshot,
    pub return_on_equity_display: String,
    pub return_on_assets_display: String,
    pub debt_to_equity_display: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialScoresView {
    #[serde(flatten)]
    pub scores: FinancialHealthScores,
    pub altman_z_score_rating: &'static str,
    pub piotroski_rating: &'static str,
}

pub async fn get_key_metrics(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Json<Sourced<KeyMetricsView>> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/key-metrics/{} - TTM metrics", ticker);

    let fetched = facade::key_metrics(state.provider.as_ref(), &ticker).await;
    Json(fetched.map(|metrics| KeyMetricsView {
        return_on_equity_display: format::format_percent(metrics.return_on_equity),
        return_on_assets_display: format::format_percent(metrics.return_on_assets),
        debt_to_equity_display: format::format_ratio(metrics.debt_to_equity),
        metrics,
    }))
}

pub async fn get_financial_scores(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Json<Sourced<FinancialScoresView>> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/financial-scores/{} - Composite scores", ticker);

    let fetched = facade::financial_scores(state.provider.as_ref(), &ticker).await;
    Json(fetched.map(|scores| FinancialScoresView {
        altman_z_score_rating: format::altman_band(scores.altman_z_score),
        piotroski_rating: format::piotroski_band(scores.piotroski_score),
        scores,
    }))
}

/// Metrics and scores fetched concurrently; see the facade bundle for
/// the independence and staleness semantics.
pub async fn get_financial_health(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Json<FinancialHealthBundle> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/financial-health/{} - Metrics + scores bundle", ticker);

    Json(facade::financial_health(state.provider.as_ref(), &state.fetches, &ticker).await)
}
