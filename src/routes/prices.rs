use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{PricePoint, Sourced};
use crate::services::facade;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stock-prices/:ticker", get(get_stock_prices))
}

#[derive(Debug, Deserialize)]
pub struct PriceHistoryParams {
    #[serde(default = "default_days")]
    days: u32,
}

fn default_days() -> u32 {
    30
}

pub async fn get_stock_prices(
    Path(ticker): Path<String>,
    Query(params): Query<PriceHistoryParams>,
    State(state): State<AppState>,
) -> Result<Json<Sourced<Vec<PricePoint>>>, AppError> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/stock-prices/{} - {} days", ticker, params.days);

    if params.days == 0 || params.days > 365 {
        return Err(AppError::Validation(
            "days must be between 1 and 365".to_string(),
        ));
    }

    Ok(Json(
        facade::daily_prices(state.provider.as_ref(), &ticker, params.days).await,
    ))
}
