//! Per-factor sub-index calculators.
//!
//! Each calculator buckets one raw reading into a coarse band. Missing and
//! non-finite inputs never fail: they fall back to a moderate default.

use std::collections::BTreeMap;

use airwise_core::models::reading::EnvironmentalReading;
use airwise_core::models::risk::SubIndices;

pub const TEMP_DEFAULT: u8 = 3;
pub const HUMIDITY_DEFAULT: u8 = 3;
pub const WIND_DEFAULT: u8 = 3;
pub const POLLUTION_DEFAULT: u8 = 3;
pub const POLLEN_DEFAULT: u8 = 2;

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Temperature in °C. Mild weather (10–20 °C) is lowest risk.
pub fn temp_index(temp_c: Option<f64>) -> u8 {
    let Some(t) = present(temp_c) else {
        return TEMP_DEFAULT;
    };
    if (10.0..=20.0).contains(&t) {
        1
    } else if (5.0..10.0).contains(&t) || (t > 20.0 && t <= 25.0) {
        3
    } else if (0.0..5.0).contains(&t) || (t > 25.0 && t <= 30.0) {
        6
    } else {
        9
    }
}

/// Relative humidity in percent. 40–60 % is lowest risk.
pub fn humidity_index(rh: Option<f64>) -> u8 {
    let Some(rh) = present(rh) else {
        return HUMIDITY_DEFAULT;
    };
    if (40.0..=60.0).contains(&rh) {
        1
    } else if (30.0..40.0).contains(&rh) || (rh > 60.0 && rh <= 70.0) {
        3
    } else if (20.0..30.0).contains(&rh) || (rh > 70.0 && rh <= 80.0) {
        6
    } else {
        9
    }
}

/// Wind speed in m/s. Still air lets pollutants stagnate, so risk rises as
/// wind drops.
pub fn wind_index(wind_ms: Option<f64>) -> u8 {
    let Some(w) = present(wind_ms) else {
        return WIND_DEFAULT;
    };
    if w > 6.0 {
        1
    } else if w > 4.0 {
        3
    } else if w > 2.0 {
        6
    } else {
        9
    }
}

/// European AQI. Values in `(0, 5]` are read as the 5-band scale, anything
/// else as the 0–100 scale. Result is clipped to `1..=10`.
pub fn pollution_index(eu_aqi: Option<f64>) -> u8 {
    let Some(x) = present(eu_aqi) else {
        return POLLUTION_DEFAULT;
    };
    let scaled = if x > 0.0 && x <= 5.0 {
        (x / 5.0) * 10.0
    } else {
        (x / 100.0) * 10.0
    };
    scaled.ceil().clamp(1.0, 10.0) as u8
}

/// Pollen, from the highest concentration across all reported species.
pub fn pollen_index(pollen: &BTreeMap<String, Option<f64>>) -> u8 {
    let max = pollen
        .values()
        .filter_map(|v| present(*v))
        .reduce(f64::max);
    match max {
        None => POLLEN_DEFAULT,
        Some(m) if m <= 10.0 => 2,
        Some(m) if m <= 50.0 => 4,
        Some(m) if m <= 100.0 => 7,
        Some(_) => 9,
    }
}

pub fn compute_sub_indices(reading: &EnvironmentalReading) -> SubIndices {
    SubIndices {
        pollution: pollution_index(reading.european_aqi),
        temp: temp_index(reading.temperature_c),
        pollen: pollen_index(&reading.pollen),
        humidity: humidity_index(reading.relative_humidity_pct),
        wind: wind_index(reading.wind_speed_ms),
    }
}
