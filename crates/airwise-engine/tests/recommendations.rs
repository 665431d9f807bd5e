use airwise_core::models::factor::Factor;
use airwise_core::models::reading::EnvironmentalReading;
use airwise_core::models::risk::RiskCategory;
use airwise_engine::recommend::DISCLAIMER;
use airwise_engine::{build_recommendations, compute_risk, recommendations_for};

fn full_reading() -> EnvironmentalReading {
    EnvironmentalReading {
        temperature_c: Some(-2.34),
        relative_humidity_pct: Some(63.7),
        wind_speed_ms: Some(1.27),
        pm2_5: Some(8.44),
        ..Default::default()
    }
}

#[test]
fn disclaimer_always_comes_first() {
    for category in [RiskCategory::Low, RiskCategory::Moderate, RiskCategory::High] {
        for factor in Factor::ALL {
            let recs = build_recommendations(category, factor, &full_reading(), Some(12.0));
            assert_eq!(recs[0], DISCLAIMER);
        }
    }
}

#[test]
fn high_tier_urges_reduced_activity() {
    let recs = build_recommendations(RiskCategory::High, Factor::Wind, &full_reading(), None);
    assert_eq!(recs[1], "Reduce strenuous outdoor activity today if possible.");
    assert!(recs[2].contains("follow your action plan"));
    assert_eq!(recs[3], "Main driver: wind / stagnation.");
    assert_eq!(recs.len(), 6);
}

#[test]
fn moderate_and_low_tiers_have_a_single_message() {
    let moderate =
        build_recommendations(RiskCategory::Moderate, Factor::Wind, &full_reading(), None);
    assert!(moderate[1].starts_with("Monitor symptoms"));
    assert_eq!(moderate[2], "Main driver: wind / stagnation.");

    let low = build_recommendations(RiskCategory::Low, Factor::Wind, &full_reading(), None);
    assert!(low[1].starts_with("Lower environmental risk signal today."));
    assert_eq!(low[2], "Main driver: wind / stagnation.");
}

#[test]
fn citations_use_fixed_precision() {
    let reading = full_reading();
    let cite = |factor, pollen_max| {
        build_recommendations(RiskCategory::Low, factor, &reading, pollen_max)[3].clone()
    };

    assert_eq!(cite(Factor::Pollution, None), "PM2.5 now ≈ 8.4 µg/m³.");
    assert_eq!(cite(Factor::Pollen, Some(63.7)), "Max pollen proxy (current) ≈ 64.");
    assert_eq!(cite(Factor::Temp, None), "Temperature now ≈ -2.3°C.");
    assert_eq!(cite(Factor::Humidity, None), "Humidity now ≈ 64%.");
    assert_eq!(cite(Factor::Wind, None), "Wind now ≈ 1.3 m/s.");
}

#[test]
fn citation_is_skipped_when_value_is_missing() {
    let recs = build_recommendations(
        RiskCategory::Moderate,
        Factor::Pollution,
        &EnvironmentalReading::default(),
        None,
    );
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[2], "Main driver: air quality / pollution.");
    assert!(recs[3].starts_with("Consider staying away from busy roads"));

    let recs = build_recommendations(
        RiskCategory::Moderate,
        Factor::Pollen,
        &EnvironmentalReading::default(),
        None,
    );
    assert_eq!(recs.len(), 4);
    assert!(recs[3].contains("pollen-sensitive"));
}

#[test]
fn recommendations_follow_computed_result() {
    let mut reading = full_reading();
    reading.temperature_c = Some(15.0);
    reading.relative_humidity_pct = Some(50.0);
    reading.wind_speed_ms = Some(8.0);
    reading.european_aqi = Some(2.0);

    let result = compute_risk(&reading, 0);
    let recs = recommendations_for(&result, &reading);
    assert_eq!(
        recs,
        vec![
            DISCLAIMER.to_string(),
            "Monitor symptoms and consider limiting exposure during peak trigger times."
                .to_string(),
            "Main driver: air quality / pollution.".to_string(),
            "PM2.5 now ≈ 8.4 µg/m³.".to_string(),
            "Consider staying away from busy roads at peak traffic; ventilate when outdoor air \
             is better."
                .to_string(),
        ]
    );
    assert_eq!(recs, recommendations_for(&result, &reading));
}
