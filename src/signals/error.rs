use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// No usable current RSI value. Distinct from a neutral (HOLD) outcome.
    #[error("no current oscillator reading available")]
    MissingReading,
}
