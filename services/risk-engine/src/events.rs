//! Assessment event definitions
//!
//! One audit event is produced per submission, scored or rejected, for
//! structured logging by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{InputField, ValidationError};
use types::ids::AssessmentId;
use types::risk::{RiskBand, RiskResult};

/// Event emitted for a single assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEvent {
    pub assessment_id: AssessmentId,
    pub event_type: AssessmentEventType,
    pub timestamp: i64,
}

/// Outcome of the assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentEventType {
    /// Inputs were valid and a result was produced
    Scored { band: RiskBand, percentage: Decimal },
    /// Validation rejected the submission
    Rejected {
        field: InputField,
        reason: ValidationError,
    },
}

impl AssessmentEvent {
    pub fn new(event_type: AssessmentEventType, timestamp: i64) -> Self {
        Self {
            assessment_id: AssessmentId::new(),
            event_type,
            timestamp,
        }
    }
}

/// Create a scored event from a result.
pub fn scored_event(result: &RiskResult, timestamp: i64) -> AssessmentEvent {
    AssessmentEvent::new(
        AssessmentEventType::Scored {
            band: result.band,
            percentage: result.percentage,
        },
        timestamp,
    )
}

/// Create a rejected event from a validation error.
pub fn rejected_event(error: ValidationError, timestamp: i64) -> AssessmentEvent {
    AssessmentEvent::new(
        AssessmentEventType::Rejected {
            field: error.field(),
            reason: error,
        },
        timestamp,
    )
}

/// Event matching an assessment outcome.
pub fn event_for_outcome(
    outcome: &Result<RiskResult, ValidationError>,
    timestamp: i64,
) -> AssessmentEvent {
    match outcome {
        Ok(result) => scored_event(result, timestamp),
        Err(error) => rejected_event(*error, timestamp),
    }
}
