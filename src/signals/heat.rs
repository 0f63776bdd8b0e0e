//! Overheat detection over the trailing RSI history.

use crate::models::indicators::{OscillatorReading, MAX_HISTORY};
use crate::models::signal::{AlertLevel, HeatAlert};
use crate::signals::thresholds::{self, OVERBOUGHT, STREAK_RESET_BELOW};

/// Count distinct overbought streaks in `values`.
///
/// A streak starts when a value rises above [`OVERBOUGHT`] and only ends once
/// a value falls below [`STREAK_RESET_BELOW`]; dips into the band between the
/// two neither start nor end one. NaN values are ignored. At most
/// [`MAX_HISTORY`] values are scanned.
pub fn count_overbought_streaks(values: impl IntoIterator<Item = f64>) -> u32 {
    let mut streaks = 0;
    let mut in_streak = false;

    for value in values.into_iter().take(MAX_HISTORY) {
        if value > OVERBOUGHT {
            if !in_streak {
                streaks += 1;
                in_streak = true;
            }
        } else if value < STREAK_RESET_BELOW {
            in_streak = false;
        }
    }

    streaks
}

/// Alert level for a current reading given the streak count.
pub fn alert_level(current: f64, streaks: u32) -> AlertLevel {
    if current > OVERBOUGHT {
        thresholds::cycle_level(streaks)
    } else {
        AlertLevel::Normal
    }
}

/// Full heat alert for a reading. `None` when there is no current value.
pub fn heat_alert(oscillator: &OscillatorReading) -> Option<HeatAlert> {
    oscillator
        .current()
        .map(|current| alert_for(oscillator, current))
}

/// Heat alert for a history whose current value is already known.
pub fn alert_for(oscillator: &OscillatorReading, current: f64) -> HeatAlert {
    let peak_cycles = count_overbought_streaks(oscillator.values());
    let level = alert_level(current, peak_cycles);

    HeatAlert {
        level,
        peak_cycles,
        badge: thresholds::alert_badge(level),
    }
}

pub fn is_overheated(current: f64) -> bool {
    current > OVERBOUGHT
}
