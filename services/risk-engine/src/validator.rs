//! Submission validation
//!
//! Parses the free-form form fields and range-checks them before any
//! probability is computed.

use types::errors::ValidationError;
use types::patient::{
    CulpritVessel, PatientInputs, RawSubmission, SHOCK_INDEX_MAX, SHOCK_INDEX_MIN,
};

/// Validate a raw submission.
///
/// Returns the first failing rule, checked in this order:
/// 1. Shock index present and numeric
/// 2. Shock index within [0, 2]
/// 3. TIMI score present and numeric
/// 4. TIMI score an integer within [0, 14]
///
/// The culprit vessel is already constrained to {LAD, OTHER} by its type.
pub fn validate(raw: &RawSubmission) -> Result<PatientInputs, ValidationError> {
    let shock_index = parse_shock_index(raw.shock_index.as_deref())?;
    check_shock_index(shock_index)?;

    let timi = parse_timi(raw.timi.as_deref())?;

    validate_values(shock_index, timi, raw.culprit_vessel)
}

/// Range-check already-numeric inputs with the same rules as [`validate`].
pub fn validate_values(
    shock_index: f64,
    timi: i64,
    culprit_vessel: CulpritVessel,
) -> Result<PatientInputs, ValidationError> {
    PatientInputs::try_new(shock_index, timi, culprit_vessel)
}

/// Parse the shock index text. Blank or non-numeric text counts as missing.
fn parse_shock_index(text: Option<&str>) -> Result<f64, ValidationError> {
    let text = non_blank(text).ok_or(ValidationError::ShockIndexMissing)?;
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ValidationError::ShockIndexMissing),
    }
}

fn check_shock_index(value: f64) -> Result<(), ValidationError> {
    if (SHOCK_INDEX_MIN..=SHOCK_INDEX_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ShockIndexOutOfRange)
    }
}

/// Parse the TIMI score text.
///
/// Integral values written with a fraction (`"5.0"`) are accepted; any other
/// finite number is outside the integer domain and reported as out of range.
fn parse_timi(text: Option<&str>) -> Result<i64, ValidationError> {
    let text = non_blank(text).ok_or(ValidationError::TimiMissing)?;
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_nan() => Err(ValidationError::TimiMissing),
        // Saturating cast; anything this large fails the range check anyway
        Ok(value) if value.fract() == 0.0 => Ok(value as i64),
        Ok(_) => Err(ValidationError::TimiOutOfRange),
        Err(_) => Err(ValidationError::TimiMissing),
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
