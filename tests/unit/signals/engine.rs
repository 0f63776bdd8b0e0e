//! Unit tests for the market heat engine and its report shape

use goldpulse::models::indicators::{OscillatorPoint, OscillatorReading, TrendIndicator};
use goldpulse::signals::{ClassifyError, MarketHeatEngine, MarketInputs};
use serde_json::{json, Value};

fn history(values: &[(&str, f64)]) -> OscillatorReading {
    OscillatorReading::new(
        values
            .iter()
            .map(|(date, value)| OscillatorPoint::new(*date, *value))
            .collect(),
    )
}

#[test]
fn report_serializes_with_front_end_field_names() {
    let inputs = MarketInputs {
        oscillator: history(&[
            ("2024-05-03", 82.5),
            ("2024-05-02", 60.0),
            ("2024-05-01", 74.0),
        ]),
        trend: Some(TrendIndicator::new(3.0, 4.0, -1.0)),
        closes: vec![2306.0, 2300.0],
    };

    let evaluation = MarketHeatEngine::evaluate(&inputs).unwrap();
    let body = serde_json::to_value(&evaluation.report).unwrap();

    assert_eq!(
        body,
        json!({
            "currentHeat": 82.5,
            "heatLevel": 2,
            "peakCycles": 2,
            "maxCycles": 3,
            "alert": {
                "title": "Caution - Market Overheating",
                "color": "yellow",
                "icon": "🟡"
            },
            "isOverheated": true,
            "signal": {
                "type": "EXIT",
                "icon": "🔴",
                "color": "red",
                "strength": 9,
                "strengthLabel": "VERY STRONG",
                "confidence": 90,
                "pulseSpeed": "Gradual",
                "pulseIcon": "🐌",
                "pulseValue": "0.26",
                "supportingIndicators": [
                    "✅ Very High Heat (82.5° - STRONG SELL)",
                    "✅ Negative Trend Force"
                ],
                "trendForce": "Bearish"
            },
            "history": [
                { "date": "2024-05-03", "heat": 82.5 },
                { "date": "2024-05-02", "heat": 60.0 },
                { "date": "2024-05-01", "heat": 74.0 }
            ]
        })
    );
}

#[test]
fn missing_secondary_inputs_degrade_to_neutral_defaults() {
    let inputs = MarketInputs {
        oscillator: history(&[("2024-05-03", 45.0)]),
        trend: None,
        closes: vec![2300.0],
    };

    let report = MarketHeatEngine::evaluate(&inputs).unwrap().report;
    let signal: Value = serde_json::to_value(&report.signal).unwrap();

    assert_eq!(signal["type"], "HOLD");
    assert_eq!(signal["strength"], 4);
    assert_eq!(signal["confidence"], 50);
    assert_eq!(signal["strengthLabel"], "MODERATE");
    assert_eq!(signal["pulseSpeed"], "Steady");
    assert_eq!(signal["pulseIcon"], "🚶");
    assert_eq!(signal["pulseValue"], "0.00");
    assert_eq!(signal["trendForce"], "Neutral");
    assert_eq!(report.heat_level, 0);
    assert!(!report.is_overheated);
}

#[test]
fn missing_reading_fails_evaluation() {
    let err = MarketHeatEngine::evaluate(&MarketInputs::default()).unwrap_err();
    assert_eq!(err, ClassifyError::MissingReading);
}

#[test]
fn unparseable_history_points_serialize_as_null() {
    let inputs = MarketInputs {
        oscillator: history(&[
            ("2024-05-03", 75.0),
            ("2024-05-02", f64::NAN),
            ("2024-05-01", 67.0),
            ("2024-04-30", 75.0),
        ]),
        ..MarketInputs::default()
    };

    let report = MarketHeatEngine::evaluate(&inputs).unwrap().report;
    let body = serde_json::to_value(&report).unwrap();

    assert_eq!(report.peak_cycles, 1);
    assert_eq!(body["history"].as_array().unwrap().len(), 4);
    assert_eq!(body["history"][1], json!({ "date": "2024-05-02", "heat": null }));
}
