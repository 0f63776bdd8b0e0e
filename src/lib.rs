//! Gold market heat and signal API.

pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
