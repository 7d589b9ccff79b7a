mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{generate, method_not_allowed, not_found, GENERATION_FAILED};
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
