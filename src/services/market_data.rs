//! Market data provider interface and per-request input gathering.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::metrics::Metrics;
use crate::models::indicators::{OscillatorReading, TrendIndicator};
use crate::services::error::Result;
use crate::signals::engine::MarketInputs;

const PROVIDER: &str = "twelve_data";

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily RSI(14) history for a symbol, most recent first.
    async fn rsi_series(&self, symbol: &str) -> Result<OscillatorReading>;

    /// Latest daily MACD triple, `None` if the provider returned no rows.
    async fn latest_macd(&self, symbol: &str) -> Result<Option<TrendIndicator>>;

    /// Recent daily closes, most recent first.
    async fn recent_closes(&self, symbol: &str) -> Result<Vec<f64>>;
}

/// Fetch everything one market heat evaluation needs.
///
/// The three requests run concurrently and each one's outcome is counted
/// under the `twelve_data` provider. RSI failures abort; MACD and price
/// failures are logged and degrade to missing values.
pub async fn gather_market_inputs(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    metrics: &Metrics,
) -> Result<MarketInputs> {
    let (rsi, macd, closes) = tokio::join!(
        provider.rsi_series(symbol),
        provider.latest_macd(symbol),
        provider.recent_closes(symbol),
    );

    for ok in [rsi.is_ok(), macd.is_ok(), closes.is_ok()] {
        metrics.record_upstream(PROVIDER, ok);
    }

    let oscillator = rsi?;

    let trend = macd.unwrap_or_else(|e| {
        warn!(error = %e, symbol, "MACD unavailable, trend force will be neutral");
        None
    });

    let closes = closes.unwrap_or_else(|e| {
        warn!(error = %e, symbol, "Price series unavailable, pulse speed will default");
        Vec::new()
    });

    debug!(
        symbol,
        rsi_points = oscillator.len(),
        has_macd = trend.is_some(),
        closes = closes.len(),
        "Gathered market inputs"
    );

    Ok(MarketInputs {
        oscillator,
        trend,
        closes,
    })
}
