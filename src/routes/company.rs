use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::format;
use crate::models::{CompanyProfile, Sourced};
use crate::services::facade;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/company/:ticker", get(get_company_profile))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfileView {
    #[serde(flatten)]
    pub profile: CompanyProfile,
    pub market_cap_display: String,
    pub price_display: String,
}

pub async fn get_company_profile(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Json<Sourced<CompanyProfileView>> {
    let ticker = ticker.to_ascii_uppercase();
    info!("GET /api/company/{} - Company profile", ticker);

    let fetched = facade::company_profile(state.provider.as_ref(), &ticker).await;
    Json(fetched.map(|profile| CompanyProfileView {
        market_cap_display: format::format_currency(profile.market_cap as f64),
        price_display: format::format_currency(profile.price),
        profile,
    }))
}
