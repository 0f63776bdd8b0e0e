//! Threshold tables for the signal and heat analyses.
//!
//! Each table is scanned top to bottom and the first matching row wins;
//! the trailing constant is the fallback when no row matches.

use crate::models::signal::{AlertBadge, AlertLevel, HeatZone, PulseSpeed};

/// RSI below this is an entry (buy) zone.
pub const ENTRY_BELOW: f64 = 40.0;
/// RSI above this is an exit (sell) zone.
pub const EXIT_ABOVE: f64 = 60.0;

pub const MAX_STRENGTH: u8 = 10;
pub const MAX_CONFIDENCE: u8 = 98;
pub const HOLD_STRENGTH: u8 = 4;
pub const HOLD_CONFIDENCE: u8 = 50;

pub const OVERBOUGHT: f64 = 70.0;
/// A streak only ends once RSI drops below this.
pub const STREAK_RESET_BELOW: f64 = 65.0;
pub const MAX_CYCLES: u32 = 3;

/// Upper bound (exclusive) on `|Δprice%|` for each pulse bucket.
pub const PULSE_BANDS: [(f64, PulseSpeed); 3] = [
    (0.5, PulseSpeed::Gradual),
    (1.5, PulseSpeed::Steady),
    (3.0, PulseSpeed::Rapid),
];
pub const PULSE_FALLBACK: PulseSpeed = PulseSpeed::Extreme;

/// Entry tiers: RSI strictly below the bound.
pub const ENTRY_TIERS: [(f64, u8, HeatZone); 3] = [
    (10.0, 10, HeatZone::ExtremeLow),
    (20.0, 8, HeatZone::VeryLow),
    (30.0, 6, HeatZone::Low),
];
pub const ENTRY_FALLBACK: (u8, HeatZone) = (4, HeatZone::Cooling);

/// Exit tiers: RSI strictly above the bound.
pub const EXIT_TIERS: [(f64, u8, HeatZone); 3] = [
    (90.0, 10, HeatZone::ExtremeHigh),
    (80.0, 8, HeatZone::VeryHigh),
    (70.0, 6, HeatZone::High),
];
pub const EXIT_FALLBACK: (u8, HeatZone) = (4, HeatZone::Rising);

/// Minimum strength for each label.
pub const STRENGTH_LABELS: [(u8, &str); 3] =
    [(9, "VERY STRONG"), (7, "STRONG"), (4, "MODERATE")];
pub const STRENGTH_LABEL_FALLBACK: &str = "WEAK";

/// Minimum streak count for each alert level while overbought.
pub const CYCLE_LEVELS: [(u32, AlertLevel); 2] =
    [(3, AlertLevel::ExtremePeak), (2, AlertLevel::Overheating)];
pub const CYCLE_LEVEL_FALLBACK: AlertLevel = AlertLevel::StrongMomentum;

pub fn pulse_speed(magnitude: f64) -> PulseSpeed {
    PULSE_BANDS
        .iter()
        .find(|(bound, _)| magnitude < *bound)
        .map(|(_, speed)| *speed)
        .unwrap_or(PULSE_FALLBACK)
}

/// Base strength and zone for an oversold reading.
pub fn entry_tier(heat: f64) -> (u8, HeatZone) {
    ENTRY_TIERS
        .iter()
        .find(|(bound, _, _)| heat < *bound)
        .map(|(_, strength, zone)| (*strength, *zone))
        .unwrap_or(ENTRY_FALLBACK)
}

/// Base strength and zone for an overbought reading.
pub fn exit_tier(heat: f64) -> (u8, HeatZone) {
    EXIT_TIERS
        .iter()
        .find(|(bound, _, _)| heat > *bound)
        .map(|(_, strength, zone)| (*strength, *zone))
        .unwrap_or(EXIT_FALLBACK)
}

pub fn strength_label(strength: u8) -> &'static str {
    STRENGTH_LABELS
        .iter()
        .find(|(min, _)| strength >= *min)
        .map(|(_, label)| *label)
        .unwrap_or(STRENGTH_LABEL_FALLBACK)
}

/// Alert level for an overbought current reading with `cycles` streaks.
pub fn cycle_level(cycles: u32) -> AlertLevel {
    CYCLE_LEVELS
        .iter()
        .find(|(min, _)| cycles >= *min)
        .map(|(_, level)| *level)
        .unwrap_or(CYCLE_LEVEL_FALLBACK)
}

pub fn alert_badge(level: AlertLevel) -> AlertBadge {
    match level {
        AlertLevel::Normal => AlertBadge {
            title: "Normal Market Conditions",
            color: "gray",
            icon: "⚪",
        },
        AlertLevel::StrongMomentum => AlertBadge {
            title: "Strong Momentum - High Gains Probable",
            color: "green",
            icon: "🟢",
        },
        AlertLevel::Overheating => AlertBadge {
            title: "Caution - Market Overheating",
            color: "yellow",
            icon: "🟡",
        },
        AlertLevel::ExtremePeak => AlertBadge {
            title: "Alert - Extreme Peak Zone",
            color: "red",
            icon: "🔴",
        },
    }
}
