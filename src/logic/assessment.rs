use crate::models::{EnvironmentalScores, RiskLevel};
use rand::Rng;

pub const CONFIDENCE_MIN: f64 = 75.0;
pub const CONFIDENCE_MAX: f64 = 95.0;
/// Total width of the confidence jitter (±4 points)
pub const CONFIDENCE_JITTER: f64 = 8.0;

/// Confidence before jitter: 85% at an input quality of 0.8, 25 points per unit.
pub fn base_confidence(scores: &EnvironmentalScores) -> f64 {
    85.0 + (scores.overall() - 0.8) * 25.0
}

pub fn confidence_jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * CONFIDENCE_JITTER
}

pub fn confidence(scores: &EnvironmentalScores, jitter: f64) -> u8 {
    (base_confidence(scores) + jitter)
        .clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
        .round() as u8
}

pub fn classify_risk(overall_score: f64) -> RiskLevel {
    if overall_score > 0.95 {
        RiskLevel::Low
    } else if overall_score > 0.85 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn risk_bands() {
        assert_eq!(classify_risk(0.97), RiskLevel::Low);
        assert_eq!(classify_risk(0.90), RiskLevel::Moderate);
        assert_eq!(classify_risk(0.70), RiskLevel::High);
    }

    #[test]
    fn risk_band_edges_are_exclusive() {
        assert_eq!(classify_risk(0.95), RiskLevel::Moderate);
        assert_eq!(classify_risk(0.85), RiskLevel::High);
    }

    #[test]
    fn confidence_without_jitter() {
        // Quality 1.0 -> 85 + 0.2 * 25 = 90
        let scores = EnvironmentalScores::new(1.0, 1.0);
        assert_eq!(confidence(&scores, 0.0), 90);
        assert_eq!(confidence(&scores, 3.6), 94);
        assert_eq!(confidence(&scores, -3.6), 86);
    }

    #[test]
    fn confidence_is_clamped() {
        let high = EnvironmentalScores::new(1.3, 1.0);
        assert_eq!(confidence(&high, 4.0), 95);

        let low = EnvironmentalScores::new(0.7, 0.2);
        assert_eq!(confidence(&low, -4.0), 75);
    }

    #[test]
    fn jitter_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let j = confidence_jitter(&mut rng);
            assert!((-4.0..4.0).contains(&j));
        }
    }
}
