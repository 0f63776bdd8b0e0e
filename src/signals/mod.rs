//! Signal classification and overheat analysis.

pub mod classifier;
pub mod engine;
pub mod error;
pub mod heat;
pub mod report;
pub mod thresholds;

pub use classifier::{classify, classify_heat};
pub use engine::{Evaluation, MarketHeatEngine, MarketInputs};
pub use error::ClassifyError;
pub use heat::{alert_for, count_overbought_streaks, heat_alert};
