//! Per-factor interpretation
//!
//! Each input is labelled on its own clinical scale. These cut points are
//! independent of the overall band thresholds in `banding`.

use types::patient::{CulpritVessel, PatientInputs};
use types::risk::{Factor, FactorAssessment, Severity};

/// Interpret all three inputs, in display order: shock index, TIMI, vessel.
pub fn interpret(inputs: &PatientInputs) -> Vec<FactorAssessment> {
    vec![
        shock_index_factor(inputs.shock_index()),
        timi_factor(inputs.timi_score()),
        vessel_factor(inputs.culprit_vessel()),
    ]
}

/// Shock index
///
/// | Shock index   | Label             | Severity |
/// |---------------|-------------------|----------|
/// | < 0.5         | low               | green    |
/// | 0.5 – 0.7     | normal            | green    |
/// | > 0.7 – 0.9   | elevated          | amber    |
/// | > 0.9         | markedly elevated | red      |
pub fn shock_index_factor(shock_index: f64) -> FactorAssessment {
    let (label, severity) = if shock_index < 0.5 {
        ("low", Severity::GREEN)
    } else if shock_index <= 0.7 {
        ("normal", Severity::GREEN)
    } else if shock_index <= 0.9 {
        ("elevated", Severity::AMBER)
    } else {
        ("markedly elevated", Severity::RED)
    };

    FactorAssessment::new(Factor::ShockIndex, shock_index.to_string(), label, severity)
}

/// TIMI score: `<= 3` low, `4–6` intermediate, `>= 7` high.
pub fn timi_factor(timi_score: u8) -> FactorAssessment {
    let (label, severity) = match timi_score {
        0..=3 => ("low risk", Severity::GREEN),
        4..=6 => ("intermediate risk", Severity::AMBER),
        _ => ("high risk", Severity::RED),
    };

    FactorAssessment::new(Factor::TimiScore, timi_score.to_string(), label, severity)
}

pub fn vessel_factor(vessel: CulpritVessel) -> FactorAssessment {
    let (label, severity) = match vessel {
        CulpritVessel::LAD => ("high-risk vessel", Severity::RED),
        CulpritVessel::OTHER => ("intermediate-risk vessel", Severity::AMBER),
    };

    FactorAssessment::new(Factor::CulpritVessel, vessel.to_string(), label, severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shock index ──

    #[test]
    fn test_shock_index_labels() {
        assert_eq!(shock_index_factor(0.3).label, "low");
        assert_eq!(shock_index_factor(0.6).label, "normal");
        assert_eq!(shock_index_factor(0.8).label, "elevated");
        assert_eq!(shock_index_factor(1.2).label, "markedly elevated");
    }

    #[test]
    fn test_shock_index_cut_points() {
        assert_eq!(shock_index_factor(0.5).label, "normal");
        assert_eq!(shock_index_factor(0.7).label, "normal");
        assert_eq!(shock_index_factor(0.9).label, "elevated");
        assert_eq!(shock_index_factor(0.49).label, "low");
        assert_eq!(shock_index_factor(0.91).label, "markedly elevated");
    }

    #[test]
    fn test_shock_index_severity_escalates() {
        assert_eq!(shock_index_factor(0.2).severity, Severity::GREEN);
        assert_eq!(shock_index_factor(0.6).severity, Severity::GREEN);
        assert_eq!(shock_index_factor(0.8).severity, Severity::AMBER);
        assert_eq!(shock_index_factor(1.5).severity, Severity::RED);
    }

    #[test]
    fn test_shock_index_reading() {
        assert_eq!(shock_index_factor(0.6).reading, "0.6");
        assert_eq!(shock_index_factor(1.0).reading, "1");
    }

    // ── TIMI ──

    #[test]
    fn test_timi_labels() {
        assert_eq!(timi_factor(0).label, "low risk");
        assert_eq!(timi_factor(3).label, "low risk");
        assert_eq!(timi_factor(4).label, "intermediate risk");
        assert_eq!(timi_factor(6).label, "intermediate risk");
        assert_eq!(timi_factor(7).label, "high risk");
        assert_eq!(timi_factor(14).label, "high risk");
    }

    #[test]
    fn test_timi_severity() {
        assert_eq!(timi_factor(2).severity, Severity::GREEN);
        assert_eq!(timi_factor(5).severity, Severity::AMBER);
        assert_eq!(timi_factor(9).severity, Severity::RED);
        assert_eq!(timi_factor(5).reading, "5");
    }

    // ── vessel ──

    #[test]
    fn test_vessel_lad() {
        let f = vessel_factor(CulpritVessel::LAD);
        assert_eq!(f.reading, "LAD");
        assert_eq!(f.label, "high-risk vessel");
        assert_eq!(f.severity, Severity::RED);
    }

    #[test]
    fn test_vessel_other() {
        let f = vessel_factor(CulpritVessel::OTHER);
        assert_eq!(f.reading, "non-LAD vessel");
        assert_eq!(f.label, "intermediate-risk vessel");
        assert_eq!(f.severity, Severity::AMBER);
    }

    // ── ordering ──

    #[test]
    fn test_interpret_fixed_order() {
        let inputs = PatientInputs::try_new(0.6, 5, CulpritVessel::LAD).unwrap();
        let factors = interpret(&inputs);
        let kinds: Vec<Factor> = factors.iter().map(|f| f.factor).collect();
        assert_eq!(
            kinds,
            vec![Factor::ShockIndex, Factor::TimiScore, Factor::CulpritVessel]
        );
    }

    #[test]
    fn test_factor_labels_ignore_overall_band() {
        // High overall probability, yet the shock index alone reads "low"
        let inputs = PatientInputs::try_new(0.4, 14, CulpritVessel::LAD).unwrap();
        let factors = interpret(&inputs);
        assert_eq!(factors[0].label, "low");
    }
}
