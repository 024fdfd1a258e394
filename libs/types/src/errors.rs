//! Error types for input validation
//!
//! Every variant is a user-correctable condition on a single form field.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    ShockIndex,
    Timi,
}

impl InputField {
    /// Identifier of the form control holding this field
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::ShockIndex => "shock_index",
            InputField::Timi => "timi",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection reason for a patient submission
///
/// Only the first failing rule is reported, shock index before TIMI.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("Please enter the shock index")]
    ShockIndexMissing,

    #[error("Shock index must be between 0 and 2, please correct the shock index")]
    ShockIndexOutOfRange,

    #[error("Please enter the TIMI score")]
    TimiMissing,

    #[error("TIMI score must be an integer between 0 and 14, please correct the TIMI score")]
    TimiOutOfRange,
}

impl ValidationError {
    /// The field that should be focused for correction
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::ShockIndexMissing | ValidationError::ShockIndexOutOfRange => {
                InputField::ShockIndex
            }
            ValidationError::TimiMissing | ValidationError::TimiOutOfRange => InputField::Timi,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ShockIndexMissing => "SHOCK_INDEX_MISSING",
            ValidationError::ShockIndexOutOfRange => "SHOCK_INDEX_OUT_OF_RANGE",
            ValidationError::TimiMissing => "TIMI_MISSING",
            ValidationError::TimiOutOfRange => "TIMI_OUT_OF_RANGE",
        }
    }
}
