//! Contact Management API (v1)
//!
//! A small contact-management REST service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 CONTACT API                   │
//!                      │                                               │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ security │───▶│  store  │  │
//!                      │  │ server  │    │  guard   │    │ (sqlite)│  │
//!                      │  └─────────┘    └──────────┘    └────┬────┘  │
//!                      │       ▲         (writes only)        │       │
//!     Client Response  │       │                              │       │
//!     ◀────────────────┼───────┴──────────────────────────────┘       │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────┐ ┌────────────┐  │ │
//!                      │  │  │ config │ │ tracing │ │ request id │  │ │
//!                      │  │  └────────┘ └─────────┘ └────────────┘  │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_api::config;
use contact_api::http::HttpServer;
use contact_api::store::ContactStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("contact-api v0.1.0 starting");

    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_path = %config.database.path,
        request_timeout_secs = config.timeouts.request_secs,
        api_key_configured = config.auth.api_key.is_some(),
        "Configuration loaded"
    );

    if config.auth.api_key.is_none() {
        tracing::warn!("API_KEY is not set; contact creation will be refused");
    }

    // Open the database and apply the schema
    let store = ContactStore::connect(&config.database.path).await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
