use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} API key is not configured")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream rate limit reached")]
    RateLimited,
    #[error("upstream error: {0}")]
    Api(String),
    #[error("could not decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
