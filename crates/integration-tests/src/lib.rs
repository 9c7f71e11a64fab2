//! Integration tests for Retail Hub.
//!
//! Each test starts the real router on `127.0.0.1:0` over a fresh SQLite
//! file in a temporary directory and drives it with `reqwest`, so no
//! external services are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p retail-hub-integration-tests
//! ```

#![allow(clippy::expect_used)]

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tokio::task::JoinHandle;

use retail_hub_api::config::{ApiConfig, DatabaseConfig};
use retail_hub_api::db;
use retail_hub_api::routes;
use retail_hub_api::state::AppState;

/// A running API server backed by a throwaway data file.
pub struct TestServer {
    pub client: Client,
    addr: SocketAddr,
    server: JoinHandle<()>,
    _dir: TempDir,
}

impl TestServer {
    /// Start a server on an ephemeral loopback port.
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database = DatabaseConfig::at(dir.path().join("retail-hub.sqlite"));

        let pool = db::create_pool(&database)
            .await
            .expect("Failed to create database pool");
        db::init_schema(&pool)
            .await
            .expect("Failed to initialize schema");

        let config = ApiConfig::local(database);
        let listener = tokio::net::TcpListener::bind(config.socket_addr())
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = routes::app(AppState::new(config, pool));
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: Client::new(),
            addr,
            server,
            _dir: dir,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        let status = resp.status();
        (status, resp.json().await.expect("Failed to decode body"))
    }

    /// POST a JSON body to a path and decode the JSON response.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request");
        let status = resp.status();
        (status, resp.json().await.expect("Failed to decode body"))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A unique customer email so tests never collide on the unique column.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@example.com", uuid::Uuid::new_v4())
}
