//! Risk band classification
//!
//! Maps a model probability to LOW / MEDIUM / HIGH. Each cut point belongs
//! to the higher band.

use types::risk::RiskBand;

/// Lowest probability classified as MEDIUM
pub const MEDIUM_THRESHOLD: f64 = 0.30;
/// Lowest probability classified as HIGH
pub const HIGH_THRESHOLD: f64 = 0.70;

/// Classify a probability into its risk band.
///
/// | Probability        | Band   |
/// |--------------------|--------|
/// | < 0.30             | LOW    |
/// | 0.30 – < 0.70      | MEDIUM |
/// | >= 0.70            | HIGH   |
pub fn classify(probability: f64) -> RiskBand {
    if probability < MEDIUM_THRESHOLD {
        RiskBand::LOW
    } else if probability < HIGH_THRESHOLD {
        RiskBand::MEDIUM
    } else {
        RiskBand::HIGH
    }
}
