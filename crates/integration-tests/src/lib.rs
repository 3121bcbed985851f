//! Integration tests for Recmart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p recmart-integration-tests
//! ```
//!
//! Each test spawns its own server on an ephemeral port with a fresh store,
//! so tests are isolated and need no external services.

use std::net::SocketAddr;

use recmart_server::state::AppState;
use recmart_server::store::Store;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A Recmart server running in the background of the test runtime.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the demo catalogue.
    pub async fn demo() -> Self {
        Self::spawn(Store::demo()).await
    }

    /// Start a server over empty tables.
    pub async fn empty() -> Self {
        Self::spawn(Store::new()).await
    }

    /// Start a server owning `store`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn(store: Store) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let app = recmart_server::app(AppState::new(store));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            addr,
            client: Client::new(),
            handle,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Send a GET and decode the JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Response is not JSON"))
    }

    /// Send a JSON POST and decode the JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Response is not JSON"))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
