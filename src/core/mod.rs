//! HTTP surface of the service.

pub mod http;

pub use http::*;
