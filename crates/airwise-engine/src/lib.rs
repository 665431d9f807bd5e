//! airwise-engine
//!
//! The asthma environmental risk model. Pure and synchronous: no I/O, no
//! shared mutable state. Raw readings are bucketed into sub-indices, the
//! single worst weighted factor sets the base score, self-reported medical
//! flags amplify it, and the result is clamped and banded.

pub mod breakdown;
pub mod recommend;
pub mod scoring;
pub mod subindex;

use airwise_core::models::reading::EnvironmentalReading;
use airwise_core::models::risk::RiskResult;
use airwise_core::models::weights::Weights;

pub use breakdown::{FactorBreakdown, breakdown};
pub use recommend::{build_recommendations, recommendations_for};

static WEIGHTS: Weights = Weights::STANDARD;

/// Read-only access to the weight table used by [`compute_risk`].
pub fn weights() -> &'static Weights {
    &WEIGHTS
}

/// Score a reading with the standard weight table.
///
/// `medical_factor_count` is the number of self-reported risk flags (0–3).
pub fn compute_risk(reading: &EnvironmentalReading, medical_factor_count: u8) -> RiskResult {
    let sub_indices = subindex::compute_sub_indices(reading);
    let dominance = scoring::weighted_dominance(&sub_indices, weights());
    let amplifier = scoring::medical_amplifier(medical_factor_count);
    let final_score = scoring::final_score(amplifier, dominance.base_score);
    let category = scoring::risk_band(final_score);

    tracing::debug!(
        dominant = %dominance.dominant,
        base_score = dominance.base_score,
        amplifier,
        final_score,
        category = %category,
        "risk computed"
    );

    RiskResult {
        sub_indices,
        weighted: dominance.weighted,
        dominant: dominance.dominant,
        base_score: dominance.base_score,
        medical_factor_count,
        amplifier,
        final_score,
        category,
        pollen_max: reading.max_pollen(),
    }
}
