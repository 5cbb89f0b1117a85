use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

// Route-level failures. Data-fetch errors never surface here: the
// facade resolves them to sample payloads.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}
