//! Twelve Data REST client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::messages::{parse_number, Envelope, MacdValue, PriceValue, RsiValue};
use crate::models::indicators::{OscillatorPoint, OscillatorReading, TrendIndicator, MAX_HISTORY};
use crate::services::error::{Result, ServiceError};
use crate::services::market_data::MarketDataProvider;

const INTERVAL: &str = "1day";
const RSI_PERIOD: &str = "14";

pub struct TwelveDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TwelveDataClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, api_key, http))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str, symbol: &str, extra: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url.trim_end_matches('/'), path))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("symbol", symbol)
                .append_pair("interval", INTERVAL)
                .append_pair("outputsize", &MAX_HISTORY.to_string());
            for (key, value) in extra {
                query.append_pair(key, value);
            }
            query.append_pair("apikey", &self.api_key);
        }
        Ok(url)
    }

    async fn fetch_values<T: DeserializeOwned>(
        &self,
        path: &str,
        symbol: &str,
        extra: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(path, symbol, extra)?;
        debug!(endpoint = path, symbol, "Requesting Twelve Data");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if envelope.is_error() {
            return Err(ServiceError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "Error from Twelve Data API".to_string()),
            ));
        }

        Ok(envelope.values)
    }
}

#[async_trait]
impl MarketDataProvider for TwelveDataClient {
    async fn rsi_series(&self, symbol: &str) -> Result<OscillatorReading> {
        let values: Vec<RsiValue> = self
            .fetch_values("rsi", symbol, &[("time_period", RSI_PERIOD)])
            .await?;

        // An unparseable head must not promote the next point to "current".
        if let Some(first) = values.first() {
            if parse_number(&first.rsi).is_none() {
                warn!(symbol, date = %first.datetime, "Latest RSI value is not numeric");
                return Ok(OscillatorReading::default());
            }
        }

        // Older non-numeric points stay as NaN so every upstream date is reported.
        let points = values
            .into_iter()
            .take(MAX_HISTORY)
            .map(|v| {
                let value = parse_number(&v.rsi).unwrap_or_else(|| {
                    warn!(symbol, date = %v.datetime, "Non-numeric RSI point");
                    f64::NAN
                });
                OscillatorPoint::new(v.datetime, value)
            })
            .collect();

        Ok(OscillatorReading::new(points))
    }

    async fn latest_macd(&self, symbol: &str) -> Result<Option<TrendIndicator>> {
        let values: Vec<MacdValue> = self.fetch_values("macd", symbol, &[]).await?;

        Ok(values.first().and_then(|v| {
            Some(TrendIndicator::new(
                parse_number(&v.macd)?,
                parse_number(&v.macd_signal)?,
                parse_number(&v.macd_hist)?,
            ))
        }))
    }

    async fn recent_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        let values: Vec<PriceValue> = self.fetch_values("time_series", symbol, &[]).await?;

        // Stop at the first bad close so index 0/1 stay adjacent sessions.
        Ok(values
            .iter()
            .map_while(|v| parse_number(&v.close))
            .collect())
    }
}
