use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Entry,
    Exit,
    Hold,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Entry => "ENTRY",
            SignalKind::Exit => "EXIT",
            SignalKind::Hold => "HOLD",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SignalKind::Entry => "🟢",
            SignalKind::Exit => "🔴",
            SignalKind::Hold => "⚪",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SignalKind::Entry => "green",
            SignalKind::Exit => "red",
            SignalKind::Hold => "gray",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Momentum speed bucket of the latest absolute price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PulseSpeed {
    Gradual,
    Steady,
    Rapid,
    Extreme,
}

impl PulseSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            PulseSpeed::Gradual => "Gradual",
            PulseSpeed::Steady => "Steady",
            PulseSpeed::Rapid => "Rapid",
            PulseSpeed::Extreme => "Extreme",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PulseSpeed::Gradual => "🐌",
            PulseSpeed::Steady => "🚶",
            PulseSpeed::Rapid => "🏃",
            PulseSpeed::Extreme => "🚀",
        }
    }

    pub fn is_fast(&self) -> bool {
        matches!(self, PulseSpeed::Rapid | PulseSpeed::Extreme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub speed: PulseSpeed,
    /// Absolute percent change; zero when no price delta was available.
    pub magnitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Bullish => "Bullish",
            TrendDirection::Bearish => "Bearish",
            TrendDirection::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendForce {
    pub direction: TrendDirection,
    /// `min(|histogram| * 2, 10)`, zero when neutral.
    pub strength: f64,
}

/// RSI zone a reading falls into, as reported in the supporting reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatZone {
    ExtremeLow,
    VeryLow,
    Low,
    Cooling,
    ExtremeHigh,
    VeryHigh,
    High,
    Rising,
    Neutral,
}

impl HeatZone {
    fn caption(&self) -> (&'static str, &'static str) {
        match self {
            HeatZone::ExtremeLow => ("Extreme Low Heat", "CRITICAL BUY ZONE"),
            HeatZone::VeryLow => ("Very Low Heat", "STRONG BUY"),
            HeatZone::Low => ("Low Heat Zone", "BUY"),
            HeatZone::Cooling => ("Cooling Heat", "CONSIDER BUY"),
            HeatZone::ExtremeHigh => ("Extreme High Heat", "CRITICAL SELL ZONE"),
            HeatZone::VeryHigh => ("Very High Heat", "STRONG SELL"),
            HeatZone::High => ("High Heat Zone", "SELL"),
            HeatZone::Rising => ("Rising Heat", "CONSIDER SELL"),
            HeatZone::Neutral => ("Neutral Heat", "RANGE: 40-60°"),
        }
    }
}

/// Why a signal was raised. Rendered to text only at the response boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalReason {
    Heat { zone: HeatZone, heat: f64 },
    PositiveTrendForce,
    NegativeTrendForce,
    UpwardPulse { speed: PulseSpeed },
    DownwardPulse { speed: PulseSpeed },
    AwaitThreshold,
}

impl fmt::Display for SignalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalReason::Heat { zone, heat } => {
                let (name, verdict) = zone.caption();
                let marker = if *zone == HeatZone::Neutral { "ℹ️" } else { "✅" };
                write!(f, "{} {} ({:.1}° - {})", marker, name, heat, verdict)
            }
            SignalReason::PositiveTrendForce => f.write_str("✅ Positive Trend Force"),
            SignalReason::NegativeTrendForce => f.write_str("✅ Negative Trend Force"),
            SignalReason::UpwardPulse { speed } => write!(
                f,
                "✅ Strong Upward Pulse ({} {})",
                speed.icon(),
                speed.as_str()
            ),
            SignalReason::DownwardPulse { speed } => write!(
                f,
                "✅ Strong Downward Pulse ({} {})",
                speed.icon(),
                speed.as_str()
            ),
            SignalReason::AwaitThreshold => {
                f.write_str("ℹ️ Wait for Market Heat < 40° (BUY) or > 60° (SELL)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalResult {
    pub kind: SignalKind,
    /// Integer score in `[0, 10]`.
    pub strength: u8,
    /// Percentage in `[0, 98]`.
    pub confidence: u8,
    pub reasons: Vec<SignalReason>,
    pub pulse: Pulse,
    pub trend: TrendForce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Normal = 0,
    StrongMomentum = 1,
    Overheating = 2,
    ExtremePeak = 3,
}

impl AlertLevel {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Static presentation of an [`AlertLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertBadge {
    pub title: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatAlert {
    pub level: AlertLevel,
    /// Distinct overbought streaks counted in the trailing history.
    pub peak_cycles: u32,
    pub badge: AlertBadge,
}
