//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, CORS, timeout)
//! - Compose the access guard in front of mutating routes only
//! - Bind server to listener and serve with graceful shutdown

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::CorsConfig;
use crate::config::{AppConfig, AuthConfig};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::security::access_control::require_api_key;
use crate::store::ContactStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: ContactStore,
    pub auth: AuthConfig,
}

/// HTTP server for the contact API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: AppConfig, store: ContactStore) -> Self {
        let state = AppState {
            store,
            auth: config.auth.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let read_routes = Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/contacts", get(handlers::list_contacts))
            .route("/api/contacts/{id}", get(handlers::get_contact));

        // The guard applies to mutating routes only; reads stay open.
        let write_routes = Router::new()
            .route("/api/contacts", post(handlers::create_contact))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            ));

        read_routes
            .merge(write_routes)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(cors_layer(&config.cors))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Translate the configured origin list into a CORS layer. An empty list
/// means any origin.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
