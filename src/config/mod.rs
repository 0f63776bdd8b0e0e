//! Environment-driven configuration.
//!
//! Every value comes from the process environment (a `.env` file is loaded
//! by the binaries through `dotenvy`). Missing API keys are not fatal: the
//! routes that need them answer "not configured" instead.

use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SYMBOL: &str = "XAU/USD";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const TWELVE_DATA_BASE_URL: &str = "https://api.twelvedata.com";
pub const METALS_DEV_BASE_URL: &str = "https://api.metals.dev";
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// Returns the deployment environment name, lowercased.
///
/// Reads `APP_ENV` first, then `ENVIRONMENT`, falling back to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub symbol: String,
    pub twelve_data_api_key: Option<String>,
    pub twelve_data_base_url: String,
    pub metals_dev_api_key: Option<String>,
    pub metals_dev_base_url: String,
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            symbol: DEFAULT_SYMBOL.to_string(),
            twelve_data_api_key: None,
            twelve_data_base_url: TWELVE_DATA_BASE_URL.to_string(),
            metals_dev_api_key: None,
            metals_dev_base_url: METALS_DEV_BASE_URL.to_string(),
            news_api_key: None,
            news_api_base_url: NEWS_API_BASE_URL.to_string(),
            upstream_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            environment: get_environment(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            symbol: non_empty_var("MARKET_SYMBOL").unwrap_or(defaults.symbol),
            twelve_data_api_key: non_empty_var("TWELVE_DATA_API_KEY"),
            twelve_data_base_url: non_empty_var("TWELVE_DATA_BASE_URL")
                .unwrap_or(defaults.twelve_data_base_url),
            metals_dev_api_key: non_empty_var("METALS_DEV_API_KEY"),
            metals_dev_base_url: non_empty_var("METALS_DEV_BASE_URL")
                .unwrap_or(defaults.metals_dev_base_url),
            news_api_key: non_empty_var("NEWS_API_KEY"),
            news_api_base_url: non_empty_var("NEWS_API_BASE_URL")
                .unwrap_or(defaults.news_api_base_url),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
