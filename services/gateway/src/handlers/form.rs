use crate::error::AppError;
use crate::models::{ClampRequest, ClampResponse, HealthResponse};
use crate::presenter::{self, FormView};
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// Live clamping of a field as the user types
pub async fn clamp_input(
    State(state): State<AppState>,
    payload: Result<Json<ClampRequest>, JsonRejection>,
) -> Result<Json<ClampResponse>, AppError> {
    let Json(request) = payload?;
    let value = presenter::clamp_input(request.field, &request.value, &state.config);

    Ok(Json(ClampResponse {
        field: request.field,
        value,
    }))
}

/// Clear the form and hide the result; the engine keeps no state to reset
pub async fn reset_form() -> Json<FormView> {
    Json(FormView::reset())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
