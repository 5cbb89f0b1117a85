use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{FinancialStatementPeriod, Sourced};
use crate::services::facade;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/financials/:ticker", get(get_financials))
}

#[derive(Debug, Deserialize)]
pub struct FinancialsParams {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    8
}

pub async fn get_financials(
    Path(ticker): Path<String>,
    Query(params): Query<FinancialsParams>,
    State(state): State<AppState>,
) -> Result<Json<Sourced<Vec<FinancialStatementPeriod>>>, AppError> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/financials/{} - {} periods", ticker, params.limit);

    if params.limit == 0 || params.limit > 40 {
        return Err(AppError::Validation(
            "limit must be between 1 and 40".to_string(),
        ));
    }

    Ok(Json(
        facade::quarterly_financials(state.provider.as_ref(), &ticker, params.limit).await,
    ))
}
