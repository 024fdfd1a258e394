//! View models for the risk calculator page
//!
//! Turns engine output into what the page shows: the percentage label, the
//! band badge and bar, the interpretation and the factor table. Also owns
//! form reset and live input clamping, which never reach the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{InputField, ValidationError};
use types::patient::{CulpritVessel, SHOCK_INDEX_MAX, SHOCK_INDEX_MIN, TIMI_MAX, TIMI_MIN};
use types::risk::{Factor, FactorAssessment, RiskBand, RiskResult};

use crate::config::GatewayConfig;

/// Rendered assessment result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentView {
    /// e.g. `85.8%`
    pub percentage_label: String,
    /// Width of the risk bar, same value as the percentage
    pub bar_width: Decimal,
    pub band: RiskBand,
    pub band_label: String,
    pub band_color: String,
    pub interpretation: String,
    pub factors: Vec<FactorRow>,
}

/// One row of the factor table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRow {
    pub name: String,
    /// e.g. `0.6 (normal)`, `5 points (intermediate risk)`
    pub value: String,
    pub color: String,
}

/// User-facing validation notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub code: String,
    pub message: String,
    /// Form control to focus for correction
    pub focus: InputField,
}

/// Form state as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub shock_index: String,
    pub timi: String,
    pub culprit_vessel: CulpritVessel,
    pub result_visible: bool,
}

impl FormView {
    /// Cleared inputs, default vessel, result hidden
    pub fn reset() -> Self {
        Self {
            shock_index: String::new(),
            timi: String::new(),
            culprit_vessel: CulpritVessel::default(),
            result_visible: false,
        }
    }
}

pub fn render(result: &RiskResult) -> AssessmentView {
    AssessmentView {
        percentage_label: format!("{}%", result.percentage),
        bar_width: result.percentage,
        band: result.band,
        band_label: result.band.label().to_string(),
        band_color: result.band.color().to_string(),
        interpretation: result.band.interpretation().to_string(),
        factors: result.factors.iter().map(factor_row).collect(),
    }
}

fn factor_row(assessment: &FactorAssessment) -> FactorRow {
    let value = match assessment.factor {
        Factor::TimiScore => format!("{} points ({})", assessment.reading, assessment.label),
        Factor::ShockIndex | Factor::CulpritVessel => {
            format!("{} ({})", assessment.reading, assessment.label)
        }
    };

    FactorRow {
        name: assessment.factor.name().to_string(),
        value,
        color: assessment.severity.color().to_string(),
    }
}

pub fn notice(error: ValidationError) -> Notice {
    Notice {
        code: error.code().to_string(),
        message: error.to_string(),
        focus: error.field(),
    }
}

/// Clamp text typed into a numeric field to that field's range.
///
/// Text that does not parse as a number is left as typed, so partial input
/// such as `-` or `1.` survives. Validation still runs on submit.
pub fn clamp_input(field: InputField, text: &str, config: &GatewayConfig) -> String {
    let (enabled, min, max) = match field {
        InputField::ShockIndex => (config.clamp_shock_index, SHOCK_INDEX_MIN, SHOCK_INDEX_MAX),
        InputField::Timi => (config.clamp_timi, TIMI_MIN as f64, TIMI_MAX as f64),
    };
    if !enabled {
        return text.to_string();
    }

    match text.trim().parse::<f64>() {
        Ok(value) if value < min => min.to_string(),
        Ok(value) if value > max => max.to_string(),
        _ => text.to_string(),
    }
}
