//! Goldpulse API Server
//!
//! Serves market heat signals, metal spot prices and gold news to the
//! front-end. Stateless; run as many replicas as needed.

use dotenvy::dotenv;
use goldpulse::config::Config;
use goldpulse::core::http::start_server;
use goldpulse::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let port = config.port;
    info!("Starting Goldpulse API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, symbol = %config.symbol, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
