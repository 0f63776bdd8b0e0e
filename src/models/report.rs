//! Wire shape of the market heat report consumed by the front-end.
//!
//! Field names are a compatibility contract; do not rename.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHeatReport {
    pub current_heat: f64,
    pub heat_level: u8,
    pub peak_cycles: u32,
    pub max_cycles: u32,
    pub alert: AlertView,
    pub is_overheated: bool,
    pub signal: SignalView,
    pub history: Vec<HistoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertView {
    pub title: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalView {
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub color: String,
    pub strength: u8,
    pub strength_label: String,
    pub confidence: u8,
    pub pulse_speed: String,
    pub pulse_icon: String,
    /// Two decimals, serialized as a string.
    pub pulse_value: String,
    pub supporting_indicators: Vec<String>,
    pub trend_force: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub heat: f64,
}
