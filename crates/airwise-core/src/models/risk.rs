use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::factor::Factor;
use super::weights::Weights;
use crate::error::CoreError;

/// Per-factor risk values, each in `1..=10` (pollen bottoms out at 2).
///
/// A struct rather than a map so that all five factors are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubIndices {
    pub pollution: u8,
    pub temp: u8,
    pub pollen: u8,
    pub humidity: u8,
    pub wind: u8,
}

impl SubIndices {
    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Pollution => self.pollution,
            Factor::Temp => self.temp,
            Factor::Pollen => self.pollen,
            Factor::Humidity => self.humidity,
            Factor::Wind => self.wind,
        }
    }

    /// Multiply each sub-index by its weight.
    pub fn weighted(&self, weights: &Weights) -> WeightedScores {
        let score = |f: Factor| weights.weight(f) * f64::from(self.get(f));
        WeightedScores {
            pollution: score(Factor::Pollution),
            temp: score(Factor::Temp),
            pollen: score(Factor::Pollen),
            humidity: score(Factor::Humidity),
            wind: score(Factor::Wind),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// Weight × sub-index for each factor. Only obtainable from
/// [`SubIndices::weighted`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedScores {
    pollution: f64,
    temp: f64,
    pollen: f64,
    humidity: f64,
    wind: f64,
}

impl WeightedScores {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Pollution => self.pollution,
            Factor::Temp => self.temp,
            Factor::Pollen => self.pollen,
            Factor::Humidity => self.humidity,
            Factor::Wind => self.wind,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// Banded risk level.
///
/// Both the classifier and the recommendation builder branch on this enum.
/// Parsing also accepts the `LOW`/`MEDIUM`/`HIGH` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskCategory::Low),
            "moderate" | "medium" => Ok(RiskCategory::Moderate),
            "high" => Ok(RiskCategory::High),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

/// Outcome of one scoring call. Built fresh each time, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskResult {
    pub sub_indices: SubIndices,
    pub weighted: WeightedScores,
    pub dominant: Factor,
    pub base_score: f64,
    pub medical_factor_count: u8,
    pub amplifier: f64,
    /// `min(10, amplifier × base_score)`.
    pub final_score: f64,
    pub category: RiskCategory,
    /// Highest pollen concentration in the reading, if any was reported.
    pub pollen_max: Option<f64>,
}
