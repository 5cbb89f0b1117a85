use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::{PopularStock, Sourced};
use crate::services::facade;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/popular-stocks", get(get_popular_stocks))
}

pub async fn get_popular_stocks(State(state): State<AppState>) -> Json<Sourced<Vec<PopularStock>>> {
    info!("GET /api/popular-stocks - Market movers");
    Json(facade::popular_stocks(state.provider.as_ref()).await)
}
