//! Twelve Data market data provider.

mod client;
pub mod messages;

pub use client::TwelveDataClient;
