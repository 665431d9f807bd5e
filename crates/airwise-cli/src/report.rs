use serde::Serialize;

use airwise_core::models::location::Location;
use airwise_core::models::medical::MedicalFactors;
use airwise_core::models::reading::EnvironmentalReading;
use airwise_core::models::risk::RiskResult;
use airwise_engine::FactorBreakdown;

/// Everything shown for one location: inputs, score, breakdown and advice.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// `None` when the reading came from a file rather than a fetch.
    pub location: Option<Location>,
    pub medical_factors: MedicalFactors,
    pub reading: EnvironmentalReading,
    pub result: RiskResult,
    pub breakdown: Vec<FactorBreakdown>,
    pub recommendations: Vec<String>,
}

impl Assessment {
    pub fn new(
        location: Option<Location>,
        reading: EnvironmentalReading,
        medical_factors: MedicalFactors,
    ) -> Self {
        let result = airwise_engine::compute_risk(&reading, medical_factors.count());
        let breakdown = airwise_engine::breakdown(&result, airwise_engine::weights());
        let recommendations = airwise_engine::recommendations_for(&result, &reading);
        Self {
            location,
            medical_factors,
            reading,
            result,
            breakdown,
            recommendations,
        }
    }
}
