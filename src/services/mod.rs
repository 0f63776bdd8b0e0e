//! Outbound integrations with third-party market data APIs.

pub mod error;
pub mod market_data;
pub mod metals;
pub mod news;
pub mod twelve_data;

pub use error::ServiceError;
pub use market_data::{gather_market_inputs, MarketDataProvider};
pub use metals::MetalsDevClient;
pub use news::{NewsApiClient, NewsDigest};
pub use twelve_data::TwelveDataClient;
