use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A snapshot of current weather and air-quality conditions.
///
/// Every field is optional: an absent value means the provider had no data,
/// which is distinct from a reading of zero. Field aliases accept the short
/// names used by normalized fetch payloads (`temp_c`, `rh`, `eu_aqi`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    #[serde(default, alias = "time")]
    pub timestamp: Option<String>,
    #[serde(default, alias = "temp_c")]
    pub temperature_c: Option<f64>,
    #[serde(default, alias = "rh")]
    pub relative_humidity_pct: Option<f64>,
    #[serde(default, alias = "wind")]
    pub wind_speed_ms: Option<f64>,
    #[serde(default, alias = "eu_aqi")]
    pub european_aqi: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default, alias = "no2")]
    pub nitrogen_dioxide: Option<f64>,
    #[serde(default, alias = "o3")]
    pub ozone: Option<f64>,
    /// Pollen concentration per species (grains/m³); `None` where the
    /// species is not reported for this region or season.
    #[serde(default)]
    pub pollen: BTreeMap<String, Option<f64>>,
}

impl EnvironmentalReading {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Highest present pollen concentration across all species.
    pub fn max_pollen(&self) -> Option<f64> {
        self.pollen
            .values()
            .filter_map(|v| *v)
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}
