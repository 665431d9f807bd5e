use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Central London, used when no location is configured.
    pub const LONDON: Location = Location {
        latitude: 51.5074,
        longitude: -0.1278,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidLocation {
            input: format!("{latitude},{longitude}"),
            reason: reason.to_string(),
        };
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::LONDON
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"LAT,LON"`, e.g. `"51.5074,-0.1278"`.
impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidLocation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected LAT,LON"))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        Location::new(latitude, longitude).map_err(|e| match e {
            CoreError::InvalidLocation { reason, .. } => invalid(&reason),
            other => other,
        })
    }
}
