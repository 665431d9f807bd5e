use airwise_core::models::factor::Factor;
use airwise_core::models::risk::{RiskCategory, SubIndices, WeightedScores};
use airwise_core::models::weights::Weights;

/// Upper bound of the final score.
pub const MAX_SCORE: f64 = 10.0;

/// Scores below this are [`RiskCategory::Low`].
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Scores at or above this are [`RiskCategory::High`].
pub const HIGH_THRESHOLD: f64 = 6.0;

/// Output of [`weighted_dominance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dominance {
    pub base_score: f64,
    pub dominant: Factor,
    pub weighted: WeightedScores,
}

/// Weight every sub-index and pick the single largest contribution.
///
/// The base score is the dominant factor's weighted value, not a sum, so one
/// bad dimension is never diluted by good readings elsewhere. Ties go to
/// the factor that comes first in [`Factor::ALL`].
pub fn weighted_dominance(sub_indices: &SubIndices, weights: &Weights) -> Dominance {
    let weighted = sub_indices.weighted(weights);

    let first = Factor::ALL[0];
    let (dominant, base_score) = weighted.iter().skip(1).fold(
        (first, weighted.get(first)),
        |best, (factor, score)| if score > best.1 { (factor, score) } else { best },
    );

    Dominance {
        base_score,
        dominant,
        weighted,
    }
}

/// Multiplier for the number of self-reported medical risk flags.
pub fn medical_amplifier(count: u8) -> f64 {
    match count {
        0 => 1.0,
        1 => 1.2,
        _ => 1.4,
    }
}

/// `amplifier × base_score`, bounded to `[0, MAX_SCORE]`. A NaN product
/// maps to 0.
pub fn final_score(amplifier: f64, base_score: f64) -> f64 {
    (amplifier * base_score).max(0.0).min(MAX_SCORE)
}

/// Band a final score. Lower bounds are inclusive: exactly 3.0 is moderate
/// and exactly 6.0 is high.
pub fn risk_band(score: f64) -> RiskCategory {
    if score < MODERATE_THRESHOLD {
        RiskCategory::Low
    } else if score < HIGH_THRESHOLD {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}
