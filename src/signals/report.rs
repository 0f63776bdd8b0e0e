//! Rendering of classifier output into the front-end report.

use crate::models::indicators::OscillatorReading;
use crate::models::report::{AlertView, HistoryPoint, MarketHeatReport, SignalView};
use crate::models::signal::{AlertBadge, HeatAlert, SignalResult};
use crate::signals::heat::is_overheated;
use crate::signals::thresholds::{strength_label, MAX_CYCLES};

pub fn build_report(
    oscillator: &OscillatorReading,
    current_heat: f64,
    signal: &SignalResult,
    alert: &HeatAlert,
) -> MarketHeatReport {
    MarketHeatReport {
        current_heat,
        heat_level: alert.level.as_u8(),
        peak_cycles: alert.peak_cycles,
        max_cycles: MAX_CYCLES,
        alert: alert_view(&alert.badge),
        is_overheated: is_overheated(current_heat),
        signal: signal_view(signal),
        history: oscillator
            .history()
            .iter()
            .map(|p| HistoryPoint {
                date: p.date.clone(),
                heat: p.value,
            })
            .collect(),
    }
}

pub fn signal_view(signal: &SignalResult) -> SignalView {
    SignalView {
        kind: signal.kind.as_str().to_string(),
        icon: signal.kind.icon().to_string(),
        color: signal.kind.color().to_string(),
        strength: signal.strength,
        strength_label: strength_label(signal.strength).to_string(),
        confidence: signal.confidence,
        pulse_speed: signal.pulse.speed.as_str().to_string(),
        pulse_icon: signal.pulse.speed.icon().to_string(),
        pulse_value: format!("{:.2}", signal.pulse.magnitude),
        supporting_indicators: signal.reasons.iter().map(ToString::to_string).collect(),
        trend_force: signal.trend.direction.as_str().to_string(),
    }
}

fn alert_view(badge: &AlertBadge) -> AlertView {
    AlertView {
        title: badge.title.to_string(),
        color: badge.color.to_string(),
        icon: badge.icon.to_string(),
    }
}
