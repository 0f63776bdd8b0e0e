//! Unit tests for the threshold lookup tables

use goldpulse::models::signal::{AlertLevel, HeatZone, PulseSpeed};
use goldpulse::signals::thresholds::{
    alert_badge, cycle_level, entry_tier, exit_tier, pulse_speed, strength_label,
    STREAK_RESET_BELOW, OVERBOUGHT,
};

#[test]
fn pulse_bands() {
    assert_eq!(pulse_speed(0.0), PulseSpeed::Gradual);
    assert_eq!(pulse_speed(0.49), PulseSpeed::Gradual);
    assert_eq!(pulse_speed(0.5), PulseSpeed::Steady);
    assert_eq!(pulse_speed(1.49), PulseSpeed::Steady);
    assert_eq!(pulse_speed(1.5), PulseSpeed::Rapid);
    assert_eq!(pulse_speed(2.99), PulseSpeed::Rapid);
    assert_eq!(pulse_speed(3.0), PulseSpeed::Extreme);
    assert_eq!(pulse_speed(12.0), PulseSpeed::Extreme);
}

#[test]
fn strength_labels() {
    assert_eq!(strength_label(10), "VERY STRONG");
    assert_eq!(strength_label(9), "VERY STRONG");
    assert_eq!(strength_label(8), "STRONG");
    assert_eq!(strength_label(7), "STRONG");
    assert_eq!(strength_label(6), "MODERATE");
    assert_eq!(strength_label(4), "MODERATE");
    assert_eq!(strength_label(3), "WEAK");
    assert_eq!(strength_label(0), "WEAK");
}

#[test]
fn tier_zones() {
    assert_eq!(entry_tier(5.0), (10, HeatZone::ExtremeLow));
    assert_eq!(entry_tier(15.0), (8, HeatZone::VeryLow));
    assert_eq!(entry_tier(25.0), (6, HeatZone::Low));
    assert_eq!(entry_tier(35.0), (4, HeatZone::Cooling));

    assert_eq!(exit_tier(95.0), (10, HeatZone::ExtremeHigh));
    assert_eq!(exit_tier(85.0), (8, HeatZone::VeryHigh));
    assert_eq!(exit_tier(75.0), (6, HeatZone::High));
    assert_eq!(exit_tier(65.0), (4, HeatZone::Rising));
}

#[test]
fn hysteresis_band_sits_below_overbought() {
    assert!(STREAK_RESET_BELOW < OVERBOUGHT);
}

#[test]
fn cycle_levels() {
    assert_eq!(cycle_level(0), AlertLevel::StrongMomentum);
    assert_eq!(cycle_level(2), AlertLevel::Overheating);
    assert_eq!(cycle_level(3), AlertLevel::ExtremePeak);
}

#[test]
fn alert_badges() {
    let badge = alert_badge(AlertLevel::StrongMomentum);
    assert_eq!(badge.title, "Strong Momentum - High Gains Probable");
    assert_eq!(badge.color, "green");
    assert_eq!(badge.icon, "🟢");
}
