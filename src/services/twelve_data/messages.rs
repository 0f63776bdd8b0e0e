//! Twelve Data REST payloads.
//!
//! Numbers arrive as strings (`"rsi": "55.12"`), and errors are reported
//! in-band with `status: "error"` alongside an HTTP 200.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[derive(Debug, Deserialize)]
pub struct RsiValue {
    pub datetime: String,
    pub rsi: Value,
}

#[derive(Debug, Deserialize)]
pub struct MacdValue {
    pub macd: Value,
    pub macd_signal: Value,
    pub macd_hist: Value,
}

#[derive(Debug, Deserialize)]
pub struct PriceValue {
    pub close: Value,
}

/// Accept both `"12.5"` and `12.5`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
