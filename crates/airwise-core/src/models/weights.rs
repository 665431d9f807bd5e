use serde::{Deserialize, Serialize};

use super::factor::Factor;

/// Relative importance of each factor in the weighted dominance model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub pollution: f64,
    pub temp: f64,
    pub pollen: f64,
    pub humidity: f64,
    pub wind: f64,
}

impl Weights {
    /// The fixed weight table used for every assessment.
    pub const STANDARD: Weights = Weights {
        pollution: 1.0,
        temp: 0.8,
        pollen: 0.7,
        humidity: 0.5,
        wind: 0.4,
    };

    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Pollution => self.pollution,
            Factor::Temp => self.temp,
            Factor::Pollen => self.pollen,
            Factor::Humidity => self.humidity,
            Factor::Wind => self.wind,
        }
    }

    /// Weights in canonical factor order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.weight(f)))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::STANDARD
    }
}
