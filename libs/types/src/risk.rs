//! Risk result types
//!
//! Output of a single MIRI assessment: probability, band and the
//! per-factor breakdown shown in the result table.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall MIRI risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    /// probability < 0.30
    LOW,
    /// 0.30 <= probability < 0.70
    MEDIUM,
    /// probability >= 0.70
    HIGH,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::LOW => "Low risk",
            RiskBand::MEDIUM => "Medium risk",
            RiskBand::HIGH => "High risk",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::LOW => Severity::GREEN.color(),
            RiskBand::MEDIUM => Severity::AMBER.color(),
            RiskBand::HIGH => Severity::RED.color(),
        }
    }

    /// Clinical reading of the band
    pub fn interpretation(&self) -> &'static str {
        match self {
            RiskBand::LOW => {
                "The model predicts a low risk of MIRI. Routine monitoring and standard care are recommended."
            }
            RiskBand::MEDIUM => {
                "The model predicts a moderate risk of MIRI. Enhanced monitoring is recommended; consider preventive treatment."
            }
            RiskBand::HIGH => {
                "The model predicts a high risk of MIRI. Active intervention and close monitoring are required."
            }
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity color tag attached to a single factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    GREEN,
    AMBER,
    RED,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::GREEN => "#27ae60",
            Severity::AMBER => "#f39c12",
            Severity::RED => "#e74c3c",
        }
    }
}

/// Model input a factor row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    ShockIndex,
    TimiScore,
    CulpritVessel,
}

impl Factor {
    pub fn name(&self) -> &'static str {
        match self {
            Factor::ShockIndex => "Shock index",
            Factor::TimiScore => "TIMI score",
            Factor::CulpritVessel => "Culprit vessel",
        }
    }
}

/// Interpretation of one input on its own scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAssessment {
    pub factor: Factor,
    /// The input as displayed, e.g. `0.6`, `5`, `LAD`
    pub reading: String,
    /// Sub-risk label, e.g. `normal`, `high risk`, `high-risk vessel`
    pub label: String,
    pub severity: Severity,
}

impl FactorAssessment {
    pub fn new(
        factor: Factor,
        reading: impl Into<String>,
        label: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            factor,
            reading: reading.into(),
            label: label.into(),
            severity,
        }
    }
}

/// Result of one assessment
///
/// Built fresh from a single set of inputs; never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Model probability in (0, 1)
    pub probability: f64,
    /// `probability * 100` rounded to one decimal place
    pub percentage: Decimal,
    pub band: RiskBand,
    /// Shock index, TIMI score, culprit vessel, in that order
    pub factors: Vec<FactorAssessment>,
}

impl RiskResult {
    pub fn new(probability: f64, band: RiskBand, factors: Vec<FactorAssessment>) -> Self {
        Self {
            probability,
            percentage: percentage_of(probability),
            band,
            factors,
        }
    }
}

/// Convert a probability to a percentage with one decimal place.
///
/// Rounds the exact binary value of `probability * 100`, half away from zero.
/// The result always carries exactly one decimal place (`50.0`, not `50`).
pub fn percentage_of(probability: f64) -> Decimal {
    let mut percentage = Decimal::from_f64_retain(probability * 100.0)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    percentage.rescale(1);
    percentage
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_band_lookup_data() {
        assert_eq!(RiskBand::LOW.label(), "Low risk");
        assert_eq!(RiskBand::MEDIUM.color(), "#f39c12");
        assert_eq!(RiskBand::HIGH.color(), "#e74c3c");
        assert!(RiskBand::LOW.interpretation().contains("Routine monitoring"));
        assert!(RiskBand::MEDIUM.interpretation().contains("preventive treatment"));
        assert!(RiskBand::HIGH.interpretation().contains("close monitoring"));
    }

    #[test]
    fn test_band_serialization() {
        assert_eq!(serde_json::to_string(&RiskBand::HIGH).unwrap(), "\"HIGH\"");
        let band: RiskBand = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(band, RiskBand::LOW);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::GREEN < Severity::AMBER);
        assert!(Severity::AMBER < Severity::RED);
        assert_eq!(Severity::GREEN.color(), "#27ae60");
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage_of(0.8575632), Decimal::from_str("85.8").unwrap());
        assert_eq!(percentage_of(0.07658), Decimal::from_str("7.7").unwrap());
        assert_eq!(percentage_of(0.5), Decimal::from_str("50.0").unwrap());
        assert_eq!(percentage_of(0.00001), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_keeps_one_decimal_place() {
        assert_eq!(percentage_of(0.5).to_string(), "50.0");
        assert_eq!(percentage_of(0.8575632).to_string(), "85.8");
    }

    #[test]
    fn test_risk_result_new_derives_percentage() {
        let result = RiskResult::new(0.123456, RiskBand::LOW, Vec::new());
        assert_eq!(result.percentage, Decimal::from_str("12.3").unwrap());
        assert_eq!(result.band, RiskBand::LOW);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_factor_names() {
        assert_eq!(Factor::ShockIndex.name(), "Shock index");
        assert_eq!(Factor::TimiScore.name(), "TIMI score");
        assert_eq!(Factor::CulpritVessel.name(), "Culprit vessel");
    }
}
