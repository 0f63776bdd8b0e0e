//! Entry/exit/hold classification from RSI, MACD and the latest price move.

use crate::models::indicators::{OscillatorReading, TrendIndicator};
use crate::models::signal::{
    HeatZone, Pulse, PulseSpeed, SignalKind, SignalReason, SignalResult, TrendDirection,
    TrendForce,
};
use crate::signals::error::ClassifyError;
use crate::signals::thresholds::{
    self, ENTRY_BELOW, EXIT_ABOVE, HOLD_CONFIDENCE, HOLD_STRENGTH, MAX_CONFIDENCE, MAX_STRENGTH,
};

/// Classify the current market state.
///
/// Only a missing current RSI reading is an error. Missing MACD data yields a
/// neutral trend force and a missing price delta yields a `Steady` pulse of
/// zero magnitude.
pub fn classify(
    oscillator: &OscillatorReading,
    trend: Option<&TrendIndicator>,
    price_delta: Option<f64>,
) -> Result<SignalResult, ClassifyError> {
    let heat = oscillator.current().ok_or(ClassifyError::MissingReading)?;
    Ok(classify_heat(heat, trend, price_delta))
}

/// Classify an already-validated current reading.
pub fn classify_heat(
    heat: f64,
    trend: Option<&TrendIndicator>,
    price_delta: Option<f64>,
) -> SignalResult {
    let pulse = pulse_from_delta(price_delta);
    let trend = trend_force(trend);

    if heat < ENTRY_BELOW {
        let (base, zone) = thresholds::entry_tier(heat);
        directional(
            SignalKind::Entry,
            base,
            SignalReason::Heat { zone, heat },
            pulse,
            trend,
        )
    } else if heat > EXIT_ABOVE {
        let (base, zone) = thresholds::exit_tier(heat);
        directional(
            SignalKind::Exit,
            base,
            SignalReason::Heat { zone, heat },
            pulse,
            trend,
        )
    } else {
        SignalResult {
            kind: SignalKind::Hold,
            strength: HOLD_STRENGTH,
            confidence: HOLD_CONFIDENCE,
            reasons: vec![
                SignalReason::Heat {
                    zone: HeatZone::Neutral,
                    heat,
                },
                SignalReason::AwaitThreshold,
            ],
            pulse,
            trend,
        }
    }
}

fn directional(
    kind: SignalKind,
    base_strength: u8,
    zone_reason: SignalReason,
    pulse: Pulse,
    trend: TrendForce,
) -> SignalResult {
    let mut strength = base_strength.min(MAX_STRENGTH);
    let mut reasons = vec![zone_reason];

    let (agreeing, trend_reason) = match kind {
        SignalKind::Entry => (TrendDirection::Bullish, SignalReason::PositiveTrendForce),
        _ => (TrendDirection::Bearish, SignalReason::NegativeTrendForce),
    };
    if trend.direction == agreeing {
        strength = (strength + 1).min(MAX_STRENGTH);
        reasons.push(trend_reason);
    }

    if pulse.speed.is_fast() {
        strength = (strength + 1).min(MAX_STRENGTH);
        reasons.push(match kind {
            SignalKind::Entry => SignalReason::UpwardPulse { speed: pulse.speed },
            _ => SignalReason::DownwardPulse { speed: pulse.speed },
        });
    }

    SignalResult {
        kind,
        strength,
        confidence: confidence_for(strength),
        reasons,
        pulse,
        trend,
    }
}

/// `min(strength * 10, 98)`.
pub fn confidence_for(strength: u8) -> u8 {
    strength.saturating_mul(10).min(MAX_CONFIDENCE)
}

pub fn pulse_from_delta(price_delta: Option<f64>) -> Pulse {
    match price_delta.filter(|d| d.is_finite()) {
        Some(delta) => {
            let magnitude = delta.abs();
            Pulse {
                speed: thresholds::pulse_speed(magnitude),
                magnitude,
            }
        }
        None => Pulse {
            speed: PulseSpeed::Steady,
            magnitude: 0.0,
        },
    }
}

pub fn trend_force(trend: Option<&TrendIndicator>) -> TrendForce {
    match trend.filter(|t| t.is_finite()) {
        Some(t) => TrendForce {
            direction: if t.macd > t.signal {
                TrendDirection::Bullish
            } else {
                TrendDirection::Bearish
            },
            strength: (t.histogram.abs() * 2.0).min(f64::from(MAX_STRENGTH)),
        },
        None => TrendForce {
            direction: TrendDirection::Neutral,
            strength: 0.0,
        },
    }
}
