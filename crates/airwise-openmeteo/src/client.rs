use std::time::Duration;

use ureq::Agent;

use airwise_core::models::location::Location;
use airwise_core::models::reading::EnvironmentalReading;

use crate::ReadingSource;
use crate::error::FetchError;
use crate::payload::{self, AIR_QUALITY_VARIABLES, WEATHER_VARIABLES};

pub const WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking Open-Meteo client. Each [`ReadingSource::current`] call makes
/// one forecast request and one air-quality request.
pub struct OpenMeteoClient {
    agent: Agent,
    weather_url: String,
    air_quality_url: String,
}

impl OpenMeteoClient {
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            weather_url: WEATHER_URL.to_string(),
            air_quality_url: AIR_QUALITY_URL.to_string(),
        }
    }

    /// Point the client at different hosts, e.g. a self-hosted Open-Meteo.
    pub fn with_base_urls(mut self, weather_url: &str, air_quality_url: &str) -> Self {
        self.weather_url = weather_url.to_string();
        self.air_quality_url = air_quality_url.to_string();
        self
    }

    fn get(
        &self,
        url: &str,
        location: Location,
        variables: &[&str],
        extra: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let mut request = self
            .agent
            .get(url)
            .query("latitude", location.latitude.to_string())
            .query("longitude", location.longitude.to_string())
            .query("timezone", "auto")
            .query("current", variables.join(","));
        for (key, value) in extra {
            request = request.query(*key, *value);
        }

        let mut response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => FetchError::Status {
                url: url.to_string(),
                status,
            },
            source => FetchError::Http {
                url: url.to_string(),
                source,
            },
        })?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ReadingSource for OpenMeteoClient {
    fn current(&self, location: Location) -> Result<EnvironmentalReading, FetchError> {
        tracing::info!(%location, "fetching current conditions");

        let weather = self.get(
            &self.weather_url,
            location,
            WEATHER_VARIABLES,
            &[("wind_speed_unit", "ms")],
        )?;
        let air = self.get(&self.air_quality_url, location, AIR_QUALITY_VARIABLES, &[])?;

        let reading = payload::normalize(
            payload::parse_weather(&weather)?,
            payload::parse_air_quality(&air)?,
        );
        tracing::debug!(
            %location,
            timestamp = reading.timestamp.as_deref().unwrap_or("-"),
            "conditions normalized"
        );
        Ok(reading)
    }
}
