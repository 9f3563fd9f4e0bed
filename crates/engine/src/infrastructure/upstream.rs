//! Shared plumbing for upstream HTTP calls.
//!
//! Every relay sends one GET and maps the outcome the same way:
//! 404 is "not found", any other non-2xx is an upstream error, and anything
//! that fails before a status arrives is a transport error.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::infrastructure::ports::{RelayBody, RelayError};

const USER_AGENT: &str = concat!("osrelay/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all relays.
///
/// The timeout bounds the whole request, including reading the body.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Send a request and return its JSON body without re-encoding it.
pub(crate) async fn relay_json(request: RequestBuilder) -> Result<RelayBody, RelayError> {
    let response = request.send().await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(RelayError::NotFound);
    }
    if !status.is_success() {
        return Err(RelayError::Upstream(status.as_u16()));
    }

    let body = response.bytes().await?;
    RelayBody::from_slice(&body)
}

pub(crate) fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode as AxumStatus},
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    use crate::test_fixtures::{spawn_upstream, test_client, unused_base_url};

    const UNSORTED_BODY: &str = r#"{"name":"Zezima","skills":[{"xp":1e2,"rank":-1,"level":1}],"activities":[],"big":123456789012345678901234567890}"#;

    #[tokio::test]
    async fn test_success_body_is_returned() {
        let base = spawn_upstream(Router::new().route(
            "/ok",
            get(|| async { Json(json!({ "hello": "world" })) }),
        ))
        .await;

        let body = relay_json(test_client().get(format!("{base}/ok")))
            .await
            .unwrap();
        assert_eq!(body.as_str(), r#"{"hello":"world"}"#);
    }

    #[tokio::test]
    async fn test_body_bytes_are_not_rewritten() {
        let base = spawn_upstream(Router::new().route(
            "/raw",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], UNSORTED_BODY) }),
        ))
        .await;

        let body = relay_json(test_client().get(format!("{base}/raw")))
            .await
            .unwrap();
        assert_eq!(body.as_str(), UNSORTED_BODY);
    }

    #[tokio::test]
    async fn test_404_is_not_found() {
        let base = spawn_upstream(Router::new()).await;

        let result = relay_json(test_client().get(format!("{base}/missing"))).await;
        assert_eq!(result, Err(RelayError::NotFound));
    }

    #[tokio::test]
    async fn test_other_status_is_upstream_error() {
        let base = spawn_upstream(Router::new().route(
            "/busy",
            get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "try later") }),
        ))
        .await;

        let result = relay_json(test_client().get(format!("{base}/busy"))).await;
        assert_eq!(result, Err(RelayError::Upstream(503)));
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_data() {
        let base = spawn_upstream(
            Router::new().route("/html", get(|| async { "<html>maintenance</html>" })),
        )
        .await;

        let result = relay_json(test_client().get(format!("{base}/html"))).await;
        assert!(matches!(result, Err(RelayError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let base = unused_base_url().await;

        let result = relay_json(test_client().get(format!("{base}/anything"))).await;
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let base = spawn_upstream(Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({}))
            }),
        ))
        .await;

        let client = build_http_client(Duration::from_millis(100)).unwrap();
        let result = relay_json(client.get(format!("{base}/slow"))).await;
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://a/b/"), "http://a/b");
        assert_eq!(trim_base_url("http://a/b"), "http://a/b");
    }
}
