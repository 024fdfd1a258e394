use crate::error::AppError;
use crate::presenter::{self, AssessmentView};
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use risk_engine::events::AssessmentEventType;
use types::patient::RawSubmission;

pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<RawSubmission>, JsonRejection>,
) -> Result<Json<AssessmentView>, AppError> {
    let Json(submission) = payload?;

    let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let (outcome, event) = state.engine.evaluate(&submission, timestamp);

    match &event.event_type {
        AssessmentEventType::Scored { band, percentage } => tracing::info!(
            assessment_id = %event.assessment_id,
            band = ?band,
            percentage = %percentage,
            "assessment completed"
        ),
        AssessmentEventType::Rejected { field, reason } => tracing::info!(
            assessment_id = %event.assessment_id,
            field = %field,
            reason = reason.code(),
            "assessment rejected"
        ),
    }

    let result = outcome?;
    Ok(Json(presenter::render(&result)))
}
