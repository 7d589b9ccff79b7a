use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::prompt::{compose_prompt, SYSTEM_PROMPT};
use crate::selection::Selection;
use crate::AppState;

use super::models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub const GENERATION_FAILED: &str = "Failed to generate case study";

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected generate request body");
        (
            rejection.status(),
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;
    let selection = Selection::from(&payload);
    let prompt = compose_prompt(&selection);
    tracing::info!(
        selection = selection.kind(),
        brand = selection.brand_type().unwrap_or(""),
        "generating case study"
    );

    match state.completion.complete(SYSTEM_PROMPT, &prompt).await {
        Ok(case_study) => Ok(Json(GenerateResponse { case_study })),
        Err(err) => {
            tracing::error!(error = %err, "error generating case study");
            let message = err.to_string();
            let message = if message.trim().is_empty() {
                GENERATION_FAILED.to_string()
            } else {
                message
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            ))
        }
    }
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
        .into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
}
