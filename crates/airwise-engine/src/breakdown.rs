use serde::Serialize;

use airwise_core::models::factor::Factor;
use airwise_core::models::risk::RiskResult;
use airwise_core::models::weights::Weights;

/// One row of the "why you got this result" table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub factor: Factor,
    pub sub_index: u8,
    pub weight: f64,
    /// Rounded to two decimals for display.
    pub weighted_score: f64,
}

/// Per-factor contributions, largest weighted score first. Equal scores
/// keep canonical factor order.
pub fn breakdown(result: &RiskResult, weights: &Weights) -> Vec<FactorBreakdown> {
    let mut rows: Vec<FactorBreakdown> = result
        .sub_indices
        .iter()
        .map(|(factor, sub_index)| FactorBreakdown {
            factor,
            sub_index,
            weight: weights.weight(factor),
            weighted_score: round2(result.weighted.get(factor)),
        })
        .collect();
    rows.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
    rows
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
