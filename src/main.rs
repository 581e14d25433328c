mod calendar;
mod constants;
mod extract;
mod handlers;
mod models;
mod utils;

use std::sync::Arc;

use tracing::{error, info};

use crate::constants::{DEFAULT_BIND_ADDR, LOG_DIRECTIVE};
use crate::models::Data;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = load_configuration();

    // Build shared state and the router
    let data = Arc::new(Data::new());
    let app = handlers::router(data);

    if let Err(e) = serve(app, &config.bind_addr).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    bind_addr: String,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Config {
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    Config { bind_addr }
}

/// Bind the listener and serve the API
async fn serve(
    app: axum::Router,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
