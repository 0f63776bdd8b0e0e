//! Metals.dev spot price client.

use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::services::error::{Result, ServiceError};

pub struct MetalsDevClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MetalsDevClient {
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

    /// Latest USD prices per troy ounce. The document is returned untouched.
    pub async fn latest(&self) -> Result<Value> {
        let url = Url::parse_with_params(
            &format!("{}/v1/latest", self.base_url.trim_end_matches('/')),
            &[
                ("api_key", self.api_key.as_str()),
                ("currency", "USD"),
                ("unit", "toz"),
            ],
        )?;
        debug!("Requesting Metals.dev latest prices");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ServiceError::RateLimited);
        }
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        match body.get("status").and_then(Value::as_str) {
            Some("success") => Ok(body),
            _ => Err(ServiceError::Api(
                body.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unexpected response from Metals.dev")
                    .to_string(),
            )),
        }
    }
}
