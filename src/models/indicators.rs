use serde::{Deserialize, Serialize};

/// Longest trailing RSI history the analyses look at.
pub const MAX_HISTORY: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorPoint {
    pub date: String,
    pub value: f64,
}

impl OscillatorPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// RSI(14) readings, most recent first. `history[0]` is the current reading.
///
/// Serialized as a bare list of points; deserializing applies the same
/// truncation as [`OscillatorReading::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<OscillatorPoint>", into = "Vec<OscillatorPoint>")]
pub struct OscillatorReading {
    history: Vec<OscillatorPoint>,
}

impl From<Vec<OscillatorPoint>> for OscillatorReading {
    fn from(history: Vec<OscillatorPoint>) -> Self {
        Self::new(history)
    }
}

impl From<OscillatorReading> for Vec<OscillatorPoint> {
    fn from(reading: OscillatorReading) -> Self {
        reading.history
    }
}

impl OscillatorReading {
    pub fn new(mut history: Vec<OscillatorPoint>) -> Self {
        history.truncate(MAX_HISTORY);
        Self { history }
    }

    /// Build a reading from bare values; dates are left empty.
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(
            values
                .iter()
                .map(|v| OscillatorPoint::new(String::new(), *v))
                .collect(),
        )
    }

    pub fn current(&self) -> Option<f64> {
        self.history
            .first()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
    }

    pub fn history(&self) -> &[OscillatorPoint] {
        &self.history
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().map(|p| p.value)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// MACD triple for the latest period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl TrendIndicator {
    pub fn new(macd: f64, signal: f64, histogram: f64) -> Self {
        Self {
            macd,
            signal,
            histogram,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.macd.is_finite() && self.signal.is_finite() && self.histogram.is_finite()
    }
}

/// Percent change between the two most recent closes.
///
/// `closes` is most recent first. Returns `None` with fewer than two closes,
/// a zero previous close, or non-finite input.
pub fn price_delta(closes: &[f64]) -> Option<f64> {
    let (latest, previous) = match closes {
        [latest, previous, ..] => (*latest, *previous),
        _ => return None,
    };
    if previous == 0.0 {
        return None;
    }
    let delta = (latest - previous) / previous * 100.0;
    delta.is_finite().then_some(delta)
}
