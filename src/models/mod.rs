//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod report;
pub mod signal;

pub use indicators::{price_delta, OscillatorPoint, OscillatorReading, TrendIndicator, MAX_HISTORY};
pub use report::{AlertView, HistoryPoint, MarketHeatReport, SignalView};
pub use signal::{
    AlertBadge, AlertLevel, HeatAlert, HeatZone, Pulse, PulseSpeed, SignalKind, SignalReason,
    SignalResult, TrendDirection, TrendForce,
};
