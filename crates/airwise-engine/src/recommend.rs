//! Human-readable guidance for a scored reading.

use airwise_core::models::factor::Factor;
use airwise_core::models::reading::EnvironmentalReading;
use airwise_core::models::risk::{RiskCategory, RiskResult};

pub const DISCLAIMER: &str =
    "Decision support only. Not diagnosis. Use your asthma plan and trusted clinical guidance.";

/// Build the ordered advice list: disclaimer, one category-tier block, then
/// a block specific to the dominant factor citing the live value when the
/// reading has one.
pub fn build_recommendations(
    category: RiskCategory,
    dominant: Factor,
    reading: &EnvironmentalReading,
    pollen_max: Option<f64>,
) -> Vec<String> {
    let mut recs = vec![DISCLAIMER.to_string()];

    match category {
        RiskCategory::High => {
            recs.push("Reduce strenuous outdoor activity today if possible.".to_string());
            recs.push(
                "If symptoms worsen or you're using your reliever more than usual, follow your \
                 action plan and seek medical advice if needed."
                    .to_string(),
            );
        }
        RiskCategory::Moderate => {
            recs.push(
                "Monitor symptoms and consider limiting exposure during peak trigger times."
                    .to_string(),
            );
        }
        RiskCategory::Low => {
            recs.push(
                "Lower environmental risk signal today. Still follow your usual asthma plan."
                    .to_string(),
            );
        }
    }

    recs.push(format!("Main driver: {}.", dominant.label()));

    let cited = |value: Option<f64>| value.filter(|v| v.is_finite());
    let citation = match dominant {
        Factor::Pollution => cited(reading.pm2_5).map(|v| format!("PM2.5 now ≈ {v:.1} µg/m³.")),
        Factor::Pollen => cited(pollen_max).map(|v| format!("Max pollen proxy (current) ≈ {v:.0}.")),
        Factor::Temp => cited(reading.temperature_c).map(|v| format!("Temperature now ≈ {v:.1}°C.")),
        Factor::Humidity => {
            cited(reading.relative_humidity_pct).map(|v| format!("Humidity now ≈ {v:.0}%."))
        }
        Factor::Wind => cited(reading.wind_speed_ms).map(|v| format!("Wind now ≈ {v:.1} m/s.")),
    };
    recs.extend(citation);

    recs.push(factor_advice(dominant).to_string());
    recs
}

/// Convenience wrapper taking the category, dominant factor and pollen
/// maximum from a computed result.
pub fn recommendations_for(result: &RiskResult, reading: &EnvironmentalReading) -> Vec<String> {
    build_recommendations(result.category, result.dominant, reading, result.pollen_max)
}

fn factor_advice(factor: Factor) -> &'static str {
    match factor {
        Factor::Pollution => {
            "Consider staying away from busy roads at peak traffic; ventilate when outdoor air \
             is better."
        }
        Factor::Pollen => {
            "If you're pollen-sensitive: keep windows closed during peak times, shower and \
             change clothes after being outside."
        }
        Factor::Temp => {
            "Cold or dry air can trigger symptoms for some people: consider a scarf or face \
             covering in cold air."
        }
        Factor::Humidity => {
            "If indoor air feels irritating, aim for comfortable indoor humidity and avoid damp \
             or mould exposure."
        }
        Factor::Wind => {
            "Low wind can trap pollutants locally. Prefer routes away from traffic hotspots."
        }
    }
}
