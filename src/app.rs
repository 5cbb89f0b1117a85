use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{company, estimates, financials, health, metrics, popular, prices};
use crate::state::AppState;

pub fn create_app(state: AppState, frontend_origin: &str) -> Router {
    let origin = frontend_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(health::router())
        .merge(company::router())
        .merge(prices::router())
        .merge(financials::router())
        .merge(metrics::router())
        .merge(estimates::router())
        .merge(popular::router());

    Router::new()
        .route("/", get(health::root))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
