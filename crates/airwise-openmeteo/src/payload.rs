//! Open-Meteo response shapes and their normalization.

use std::collections::BTreeMap;

use serde::Deserialize;

use airwise_core::models::reading::EnvironmentalReading;

use crate::error::FetchError;

pub const WEATHER_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "wind_speed_10m",
];

pub const AIR_QUALITY_VARIABLES: &[&str] = &[
    "european_aqi",
    "pm2_5",
    "nitrogen_dioxide",
    "ozone",
    "alder_pollen",
    "birch_pollen",
    "grass_pollen",
    "mugwort_pollen",
    "olive_pollen",
    "ragweed_pollen",
];

#[derive(Debug, Default, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub current: Option<CurrentWeather>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeather {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    /// Requested with `wind_speed_unit=ms`.
    pub wind_speed_10m: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AirQualityResponse {
    #[serde(default)]
    pub current: Option<CurrentAirQuality>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentAirQuality {
    pub time: Option<String>,
    pub european_aqi: Option<f64>,
    pub pm2_5: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub ozone: Option<f64>,
    pub alder_pollen: Option<f64>,
    pub birch_pollen: Option<f64>,
    pub grass_pollen: Option<f64>,
    pub mugwort_pollen: Option<f64>,
    pub olive_pollen: Option<f64>,
    pub ragweed_pollen: Option<f64>,
}

pub fn parse_weather(body: &str) -> Result<WeatherResponse, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Payload {
        endpoint: "weather",
        source,
    })
}

pub fn parse_air_quality(body: &str) -> Result<AirQualityResponse, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Payload {
        endpoint: "air-quality",
        source,
    })
}

/// Merge both responses. A missing `current` block yields an all-empty
/// half rather than an error; the weather timestamp wins over the air
/// quality one.
pub fn normalize(weather: WeatherResponse, air: AirQualityResponse) -> EnvironmentalReading {
    let w = weather.current.unwrap_or_default();
    let a = air.current.unwrap_or_default();

    let pollen: BTreeMap<String, Option<f64>> = [
        ("alder", a.alder_pollen),
        ("birch", a.birch_pollen),
        ("grass", a.grass_pollen),
        ("mugwort", a.mugwort_pollen),
        ("olive", a.olive_pollen),
        ("ragweed", a.ragweed_pollen),
    ]
    .into_iter()
    .map(|(species, value)| (species.to_string(), value))
    .collect();

    EnvironmentalReading {
        timestamp: w.time.or(a.time),
        temperature_c: w.temperature_2m,
        relative_humidity_pct: w.relative_humidity_2m,
        wind_speed_ms: w.wind_speed_10m,
        european_aqi: a.european_aqi,
        pm2_5: a.pm2_5,
        nitrogen_dioxide: a.nitrogen_dioxide,
        ozone: a.ozone,
        pollen,
    }
}
