//! Shared utilities for API integration tests.

use contact_api::config::AppConfig;
use contact_api::http::HttpServer;
use contact_api::store::ContactStore;

pub const TEST_API_KEY: &str = "test-api-key";

/// Start a server with an in-memory store and a configured API key.
/// Returns the base URL (e.g. "http://127.0.0.1:49231").
pub async fn spawn_app() -> String {
    spawn_app_with(|config| {
        config.auth.api_key = Some(TEST_API_KEY.to_string());
    })
    .await
}

/// Start a server with an in-memory store, letting the caller adjust the
/// configuration first.
pub async fn spawn_app_with(configure: impl FnOnce(&mut AppConfig)) -> String {
    let mut config = AppConfig::default();
    configure(&mut config);

    let store = ContactStore::in_memory().await.unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
