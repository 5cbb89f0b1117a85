use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::external::market_provider::ReportingPeriod;
use crate::models::{AnalystEstimate, GrowthRecord, Sourced};
use crate::services::facade::{self, GrowthOutlookBundle};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyst-estimates/:ticker", get(get_analyst_estimates))
        .route("/financial-growth/:ticker", get(get_financial_growth))
        .route("/growth-outlook/:ticker", get(get_growth_outlook))
}

#[derive(Debug, Deserialize)]
pub struct EstimateParams {
    #[serde(default = "default_period")]
    period: ReportingPeriod,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_period() -> ReportingPeriod {
    ReportingPeriod::Annual
}

fn default_limit() -> usize {
    5
}

fn validate_limit(limit: usize) -> Result<(), AppError> {
    if limit == 0 || limit > 100 {
        return Err(AppError::Validation(
            "limit must be between 1 and 100".to_string(),
        ));
    }
    Ok(())
}

pub async fn get_analyst_estimates(
    Path(ticker): Path<String>,
    Query(params): Query<EstimateParams>,
    State(state): State<AppState>,
) -> Result<Json<Sourced<Vec<AnalystEstimate>>>, AppError> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/analyst-estimates/{} - {:?}", ticker, params.period);
    validate_limit(params.limit)?;

    Ok(Json(
        facade::analyst_estimates(state.provider.as_ref(), &ticker, params.period, params.limit)
            .await,
    ))
}

pub async fn get_financial_growth(
    Path(ticker): Path<String>,
    Query(params): Query<EstimateParams>,
    State(state): State<AppState>,
) -> Result<Json<Sourced<Vec<GrowthRecord>>>, AppError> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/financial-growth/{} - {:?}", ticker, params.period);
    validate_limit(params.limit)?;

    Ok(Json(
        facade::financial_growth(state.provider.as_ref(), &ticker, params.period, params.limit)
            .await,
    ))
}

/// Estimates and growth fetched concurrently; see the facade bundle for
/// the independence and staleness semantics.
pub async fn get_growth_outlook(
    Path(ticker): Path<String>,
    Query(params): Query<EstimateParams>,
    State(state): State<AppState>,
) -> Result<Json<GrowthOutlookBundle>, AppError> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/growth-outlook/{} - Estimates + growth bundle", ticker);
    validate_limit(params.limit)?;

    Ok(Json(
        facade::growth_outlook(
            state.provider.as_ref(),
            &state.fetches,
            &ticker,
            params.period,
            params.limit,
        )
        .await,
    ))
}
