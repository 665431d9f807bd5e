use airwise_openmeteo::error::FetchError;
use airwise_openmeteo::payload::{normalize, parse_air_quality, parse_weather};

const WEATHER: &str = r#"{
    "latitude": 51.5,
    "longitude": -0.119999886,
    "generationtime_ms": 0.03,
    "utc_offset_seconds": 3600,
    "timezone": "Europe/London",
    "current_units": {"time": "iso8601", "temperature_2m": "°C"},
    "current": {
        "time": "2025-05-14T13:00",
        "interval": 900,
        "temperature_2m": 18.4,
        "relative_humidity_2m": 52,
        "wind_speed_10m": 3.6
    }
}"#;

const AIR_QUALITY: &str = r#"{
    "latitude": 51.5,
    "longitude": -0.1,
    "current": {
        "time": "2025-05-14T12:00",
        "interval": 3600,
        "european_aqi": 38,
        "pm2_5": 9.7,
        "nitrogen_dioxide": 21.3,
        "ozone": 74.0,
        "alder_pollen": 0.0,
        "birch_pollen": 3.2,
        "grass_pollen": 61.8,
        "mugwort_pollen": null,
        "olive_pollen": null,
        "ragweed_pollen": null
    }
}"#;

#[test]
fn merges_weather_and_air_quality() {
    let reading = normalize(
        parse_weather(WEATHER).unwrap(),
        parse_air_quality(AIR_QUALITY).unwrap(),
    );

    assert_eq!(reading.timestamp.as_deref(), Some("2025-05-14T13:00"));
    assert_eq!(reading.temperature_c, Some(18.4));
    assert_eq!(reading.relative_humidity_pct, Some(52.0));
    assert_eq!(reading.wind_speed_ms, Some(3.6));
    assert_eq!(reading.european_aqi, Some(38.0));
    assert_eq!(reading.pm2_5, Some(9.7));
    assert_eq!(reading.nitrogen_dioxide, Some(21.3));
    assert_eq!(reading.ozone, Some(74.0));

    let species: Vec<_> = reading.pollen.keys().map(String::as_str).collect();
    assert_eq!(
        species,
        ["alder", "birch", "grass", "mugwort", "olive", "ragweed"]
    );
    assert_eq!(reading.pollen["grass"], Some(61.8));
    assert_eq!(reading.pollen["ragweed"], None);
    assert_eq!(reading.max_pollen(), Some(61.8));
}

#[test]
fn air_quality_time_is_used_when_weather_has_none() {
    let weather = parse_weather(r#"{"current": {"temperature_2m": 4.0}}"#).unwrap();
    let reading = normalize(weather, parse_air_quality(AIR_QUALITY).unwrap());
    assert_eq!(reading.timestamp.as_deref(), Some("2025-05-14T12:00"));
    assert_eq!(reading.relative_humidity_pct, None);
}

#[test]
fn missing_current_blocks_yield_empty_reading() {
    let reading = normalize(parse_weather("{}").unwrap(), parse_air_quality("{}").unwrap());
    assert_eq!(reading.timestamp, None);
    assert_eq!(reading.temperature_c, None);
    assert_eq!(reading.european_aqi, None);
    assert_eq!(reading.pollen.len(), 6);
    assert_eq!(reading.max_pollen(), None);
}

#[test]
fn malformed_body_is_a_payload_error() {
    let err = parse_weather("<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, FetchError::Payload { endpoint: "weather", .. }));

    let err = parse_air_quality(r#"{"current": {"pm2_5": "high"}}"#).unwrap_err();
    assert!(matches!(err, FetchError::Payload { endpoint: "air-quality", .. }));
    assert!(err.to_string().starts_with("malformed air-quality payload"));
}
