//! Shared helpers for tests that need a real HTTP upstream.

use std::time::Duration;

use axum::Router;
use reqwest::Client;
use serde_json::Value;

use crate::infrastructure::ports::RelayBody;
use crate::infrastructure::upstream::build_http_client;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub async fn unused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{addr}")
}

pub fn test_client() -> Client {
    build_http_client(Duration::from_secs(5)).expect("build test client")
}

/// Upstream body for a mocked port.
pub fn relay_body(value: Value) -> RelayBody {
    let bytes = serde_json::to_vec(&value).expect("encode body");
    RelayBody::from_slice(&bytes).expect("valid JSON")
}

/// Parse a relayed body for field assertions.
pub fn body_json(body: &RelayBody) -> Value {
    serde_json::from_str(body.as_str()).expect("relayed body is JSON")
}
