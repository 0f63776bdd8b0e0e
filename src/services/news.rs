//! NewsAPI headline search.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::services::error::{Result, ServiceError};

const QUERY: &str = "gold market OR gold price";
const PAGE_SIZE: &str = "6";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDigest {
    pub articles: Vec<Value>,
    pub total_results: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Value>,
    #[serde(default)]
    total_results: u64,
}

pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
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

    /// Most recent English gold market headlines.
    pub async fn gold_headlines(&self) -> Result<NewsDigest> {
        let url = Url::parse_with_params(
            &format!("{}/v2/everything", self.base_url.trim_end_matches('/')),
            &[
                ("q", QUERY),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
                ("language", "en"),
                ("apiKey", self.api_key.as_str()),
            ],
        )?;
        debug!("Requesting NewsAPI headlines");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body: EverythingResponse = serde_json::from_str(&response.text().await?)?;
        if body.status != "ok" {
            return Err(ServiceError::Api(
                body.message
                    .unwrap_or_else(|| "Unknown error from NewsAPI".to_string()),
            ));
        }

        Ok(NewsDigest {
            articles: body.articles,
            total_results: body.total_results,
        })
    }
}
