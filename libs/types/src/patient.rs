//! Patient input types
//!
//! `RawSubmission` is what the form hands over; `PatientInputs` is the
//! range-checked value object the risk model consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::errors::ValidationError;

/// Inclusive lower bound of the shock index
pub const SHOCK_INDEX_MIN: f64 = 0.0;
/// Inclusive upper bound of the shock index
pub const SHOCK_INDEX_MAX: f64 = 2.0;
/// Inclusive lower bound of the TIMI score
pub const TIMI_MIN: i64 = 0;
/// Inclusive upper bound of the TIMI score
pub const TIMI_MAX: i64 = 14;

/// Culprit coronary vessel
///
/// Encoded on the wire as its model indicator: LAD = 0, other = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CulpritVessel {
    /// Left anterior descending artery
    #[default]
    LAD,
    /// Any non-LAD culprit vessel
    OTHER,
}

/// Vessel code outside {0, 1}
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown culprit vessel code {0}, expected 0 (LAD) or 1 (other)")]
pub struct UnknownVesselCode(pub u8);

impl CulpritVessel {
    /// Model indicator value: 0 for LAD, 1 otherwise
    pub fn code(&self) -> u8 {
        match self {
            CulpritVessel::LAD => 0,
            CulpritVessel::OTHER => 1,
        }
    }
}

impl TryFrom<u8> for CulpritVessel {
    type Error = UnknownVesselCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CulpritVessel::LAD),
            1 => Ok(CulpritVessel::OTHER),
            other => Err(UnknownVesselCode(other)),
        }
    }
}

impl From<CulpritVessel> for u8 {
    fn from(vessel: CulpritVessel) -> Self {
        vessel.code()
    }
}

impl fmt::Display for CulpritVessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CulpritVessel::LAD => f.write_str("LAD"),
            CulpritVessel::OTHER => f.write_str("non-LAD vessel"),
        }
    }
}

/// Unvalidated form submission
///
/// Numeric fields arrive as free-form text. `None` or blank text means the
/// field was left empty, which is not the same as a typed `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub shock_index: Option<String>,
    #[serde(default)]
    pub timi: Option<String>,
    #[serde(default)]
    pub culprit_vessel: CulpritVessel,
}

impl RawSubmission {
    /// Build a submission from typed text
    pub fn new(
        shock_index: impl Into<String>,
        timi: impl Into<String>,
        culprit_vessel: CulpritVessel,
    ) -> Self {
        Self {
            shock_index: Some(shock_index.into()),
            timi: Some(timi.into()),
            culprit_vessel,
        }
    }

    /// Build a submission from already-numeric values
    pub fn from_values(shock_index: f64, timi: i64, culprit_vessel: CulpritVessel) -> Self {
        Self::new(shock_index.to_string(), timi.to_string(), culprit_vessel)
    }
}

/// Validated patient inputs
///
/// Invariant: `shock_index` in [0, 2], `timi_score` in [0, 14]. The only
/// constructor enforces both, so holding a value proves it was checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatientInputs {
    shock_index: f64,
    timi_score: u8,
    culprit_vessel: CulpritVessel,
}

impl PatientInputs {
    /// Range-check numeric inputs, shock index first.
    ///
    /// `NaN` is not a number and counts as a missing shock index.
    pub fn try_new(
        shock_index: f64,
        timi_score: i64,
        culprit_vessel: CulpritVessel,
    ) -> Result<Self, ValidationError> {
        if shock_index.is_nan() {
            return Err(ValidationError::ShockIndexMissing);
        }
        if !(SHOCK_INDEX_MIN..=SHOCK_INDEX_MAX).contains(&shock_index) {
            return Err(ValidationError::ShockIndexOutOfRange);
        }
        if !(TIMI_MIN..=TIMI_MAX).contains(&timi_score) {
            return Err(ValidationError::TimiOutOfRange);
        }

        Ok(Self {
            shock_index,
            // In range, so fits in u8
            timi_score: timi_score as u8,
            culprit_vessel,
        })
    }

    pub fn shock_index(&self) -> f64 {
        self.shock_index
    }

    pub fn timi_score(&self) -> u8 {
        self.timi_score
    }

    pub fn culprit_vessel(&self) -> CulpritVessel {
        self.culprit_vessel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_codes() {
        assert_eq!(CulpritVessel::LAD.code(), 0);
        assert_eq!(CulpritVessel::OTHER.code(), 1);
        assert_eq!(CulpritVessel::try_from(0u8), Ok(CulpritVessel::LAD));
        assert_eq!(CulpritVessel::try_from(1u8), Ok(CulpritVessel::OTHER));
        assert_eq!(CulpritVessel::try_from(2u8), Err(UnknownVesselCode(2)));
    }

    #[test]
    fn test_vessel_serialization() {
        assert_eq!(serde_json::to_string(&CulpritVessel::OTHER).unwrap(), "1");
        let vessel: CulpritVessel = serde_json::from_str("0").unwrap();
        assert_eq!(vessel, CulpritVessel::LAD);
        assert!(serde_json::from_str::<CulpritVessel>("3").is_err());
    }

    #[test]
    fn test_raw_submission_defaults() {
        let raw: RawSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.shock_index, None);
        assert_eq!(raw.timi, None);
        assert_eq!(raw.culprit_vessel, CulpritVessel::LAD);
    }

    #[test]
    fn test_raw_submission_from_json() {
        let raw: RawSubmission =
            serde_json::from_str(r#"{"shock_index":"0.6","timi":"5","culprit_vessel":1}"#)
                .unwrap();
        assert_eq!(raw, RawSubmission::new("0.6", "5", CulpritVessel::OTHER));
    }

    #[test]
    fn test_from_values_round_trips_text() {
        let raw = RawSubmission::from_values(0.6, 5, CulpritVessel::LAD);
        assert_eq!(raw.shock_index.as_deref(), Some("0.6"));
        assert_eq!(raw.timi.as_deref(), Some("5"));
    }

    #[test]
    fn test_try_new_accepts_bounds() {
        assert!(PatientInputs::try_new(0.0, 0, CulpritVessel::LAD).is_ok());
        assert!(PatientInputs::try_new(2.0, 14, CulpritVessel::OTHER).is_ok());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(
            PatientInputs::try_new(-0.01, 5, CulpritVessel::LAD),
            Err(ValidationError::ShockIndexOutOfRange)
        );
        assert_eq!(
            PatientInputs::try_new(2.01, 5, CulpritVessel::LAD),
            Err(ValidationError::ShockIndexOutOfRange)
        );
        assert_eq!(
            PatientInputs::try_new(1.0, 15, CulpritVessel::LAD),
            Err(ValidationError::TimiOutOfRange)
        );
        assert_eq!(
            PatientInputs::try_new(1.0, -1, CulpritVessel::LAD),
            Err(ValidationError::TimiOutOfRange)
        );
    }

    #[test]
    fn test_try_new_shock_index_checked_first() {
        assert_eq!(
            PatientInputs::try_new(3.0, 99, CulpritVessel::LAD),
            Err(ValidationError::ShockIndexOutOfRange)
        );
    }

    #[test]
    fn test_try_new_nan_is_missing() {
        assert_eq!(
            PatientInputs::try_new(f64::NAN, 5, CulpritVessel::LAD),
            Err(ValidationError::ShockIndexMissing)
        );
        assert_eq!(
            PatientInputs::try_new(f64::INFINITY, 5, CulpritVessel::LAD),
            Err(ValidationError::ShockIndexOutOfRange)
        );
    }

    #[test]
    fn test_accessors() {
        let inputs = PatientInputs::try_new(0.6, 5, CulpritVessel::OTHER).unwrap();
        assert_eq!(inputs.shock_index(), 0.6);
        assert_eq!(inputs.timi_score(), 5);
        assert_eq!(inputs.culprit_vessel(), CulpritVessel::OTHER);
    }
}

// ── Property-Based Tests ────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_in_range_always_accepted(
            shock in SHOCK_INDEX_MIN..=SHOCK_INDEX_MAX,
            timi in TIMI_MIN..=TIMI_MAX,
            other in any::<bool>(),
        ) {
            let vessel = if other { CulpritVessel::OTHER } else { CulpritVessel::LAD };
            let inputs = PatientInputs::try_new(shock, timi, vessel);
            prop_assert!(inputs.is_ok());
            let inputs = inputs.unwrap();
            prop_assert_eq!(inputs.shock_index(), shock);
            prop_assert_eq!(i64::from(inputs.timi_score()), timi);
        }

        #[test]
        fn prop_vessel_code_round_trip(code in 0u8..=1) {
            let vessel = CulpritVessel::try_from(code).unwrap();
            prop_assert_eq!(u8::from(vessel), code);
        }
    }
}
