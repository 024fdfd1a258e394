use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::ValidationError;

use crate::presenter;

/// Central error type for the Gateway application
#[derive(Debug, Error)]
pub enum AppError {
    /// User-correctable input problem; rendered as a notice with a field to focus
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    MalformedJson(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => {
                let notice = presenter::notice(err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": "VALIDATION_FAILED",
                        "code": notice.code,
                        "message": notice.message,
                        "field": notice.focus,
                    }),
                )
            }
            AppError::MalformedJson(rejection) => (
                rejection.status(),
                json!({ "error": "BAD_REQUEST", "message": rejection.body_text() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
