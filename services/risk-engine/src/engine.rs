//! Risk Engine — orchestrator
//!
//! Ties together validation, the logistic model, band classification,
//! factor interpretation and event emission.

use tracing::debug;
use types::errors::ValidationError;
use types::patient::{PatientInputs, RawSubmission};
use types::risk::RiskResult;

use crate::banding;
use crate::events::{self, AssessmentEvent};
use crate::factors;
use crate::model;
use crate::validator;

/// MIRI risk engine
///
/// Stateless: every call recomputes from its own inputs, so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate a submission and score it.
    ///
    /// No computation happens unless every field passes validation.
    pub fn assess(&self, raw: &RawSubmission) -> Result<RiskResult, ValidationError> {
        match validator::validate(raw) {
            Ok(inputs) => {
                let result = self.score(&inputs);
                debug!(
                    band = ?result.band,
                    percentage = %result.percentage,
                    "MIRI assessment scored"
                );
                Ok(result)
            }
            Err(error) => {
                debug!(
                    field = %error.field(),
                    reason = error.code(),
                    "MIRI assessment rejected"
                );
                Err(error)
            }
        }
    }

    /// Score already-validated inputs.
    pub fn score(&self, inputs: &PatientInputs) -> RiskResult {
        let z = model::linear_predictor(inputs);
        let probability = model::logistic(z);
        debug!(
            shock_index = inputs.shock_index(),
            timi_score = inputs.timi_score(),
            culprit_vessel = inputs.culprit_vessel().code(),
            z,
            probability,
            "computed MIRI probability"
        );

        RiskResult::new(
            probability,
            banding::classify(probability),
            factors::interpret(inputs),
        )
    }

    /// Assess a submission and produce its audit event.
    pub fn evaluate(
        &self,
        raw: &RawSubmission,
        timestamp: i64,
    ) -> (Result<RiskResult, ValidationError>, AssessmentEvent) {
        let outcome = self.assess(raw);
        let event = events::event_for_outcome(&outcome, timestamp);
        (outcome, event)
    }
}
