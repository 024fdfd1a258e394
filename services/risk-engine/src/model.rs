//! Logistic regression model for MIRI probability
//!
//! ```text
//! z = -3.05583 + 4.47048 × shock_index + 0.433743 × TIMI - 1.64256 × vessel
//! P = 1 / (1 + exp(-z))
//! ```
//!
//! `vessel` is the indicator LAD = 0, other = 1. Coefficients are fixed.

use types::patient::PatientInputs;

pub const INTERCEPT: f64 = -3.05583;
pub const SHOCK_INDEX_COEF: f64 = 4.47048;
pub const TIMI_COEF: f64 = 0.433743;
pub const NON_LAD_COEF: f64 = -1.64256;

/// Linear predictor `z` of the model.
pub fn linear_predictor(inputs: &PatientInputs) -> f64 {
    INTERCEPT
        + SHOCK_INDEX_COEF * inputs.shock_index()
        + TIMI_COEF * f64::from(inputs.timi_score())
        + NON_LAD_COEF * f64::from(inputs.culprit_vessel().code())
}

/// Standard sigmoid.
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// MIRI probability in (0, 1) for validated inputs.
pub fn compute_probability(inputs: &PatientInputs) -> f64 {
    logistic(linear_predictor(inputs))
}
