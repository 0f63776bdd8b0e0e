//! Market heat evaluation: classifier and heat alert combined into one report.

use crate::models::indicators::{price_delta, OscillatorReading, TrendIndicator};
use crate::models::report::MarketHeatReport;
use crate::models::signal::{HeatAlert, SignalResult};
use crate::signals::classifier::classify_heat;
use crate::signals::error::ClassifyError;
use crate::signals::heat::alert_for;
use crate::signals::report::build_report;

/// Already-fetched upstream values for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct MarketInputs {
    pub oscillator: OscillatorReading,
    pub trend: Option<TrendIndicator>,
    /// Closing prices, most recent first.
    pub closes: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub signal: SignalResult,
    pub alert: HeatAlert,
    pub report: MarketHeatReport,
}

pub struct MarketHeatEngine;

impl MarketHeatEngine {
    pub fn evaluate(inputs: &MarketInputs) -> Result<Evaluation, ClassifyError> {
        let current = inputs
            .oscillator
            .current()
            .ok_or(ClassifyError::MissingReading)?;
        let signal = classify_heat(current, inputs.trend.as_ref(), price_delta(&inputs.closes));
        let alert = alert_for(&inputs.oscillator, current);
        let report = build_report(&inputs.oscillator, current, &signal, &alert);

        Ok(Evaluation {
            signal,
            alert,
            report,
        })
    }
}
