use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One environmental dimension contributing to the risk index.
///
/// Declaration order is the canonical order: when two factors produce the
/// same weighted score, the one declared first is dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Pollution,
    Temp,
    Pollen,
    Humidity,
    Wind,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Pollution,
        Factor::Temp,
        Factor::Pollen,
        Factor::Humidity,
        Factor::Wind,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Factor::Pollution => "pollution",
            Factor::Temp => "temp",
            Factor::Pollen => "pollen",
            Factor::Humidity => "humidity",
            Factor::Wind => "wind",
        }
    }

    /// Label used for the "main driver" line of the recommendations.
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Pollution => "air quality / pollution",
            Factor::Temp => "temperature",
            Factor::Pollen => "pollen proxy",
            Factor::Humidity => "humidity",
            Factor::Wind => "wind / stagnation",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Factor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownFactor(s.to_string()))
    }
}
