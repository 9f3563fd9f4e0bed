//! osrelay Player - terminal client.
//!
//! Validates the player name locally, then asks the relay for hiscores and a
//! fact at the same time. The two calls are independent: a failed fact never
//! hides the stats.

use reqwest::Client;
use serde_json::Value;

use osrelay_domain::PlayerName;
use osrelay_shared::{extract_fact, normalize, ErrorBody, ErrorKind, HiscoreView};

/// Default relay address.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The relay (or local validation) rejected the request.
    #[error("{}", .0.user_message())]
    Api(ErrorKind),

    /// The relay itself could not be reached.
    #[error("Could not reach the relay: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(kind) => *kind,
            Self::Transport(_) => ErrorKind::Unknown,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Api(ErrorKind::InvalidData)
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// What gets printed for one search.
#[derive(Debug)]
pub struct Report {
    pub stats: HiscoreView,
    pub fact: Result<String, ClientError>,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.stats.lines();
        lines.push(String::new());
        lines.push(match &self.fact {
            Ok(fact) => format!("Cat Fact: {fact}"),
            Err(e) => format!("Failed to load cat fact: {e}"),
        });
        lines
    }
}

/// HTTP client for the relay.
#[derive(Clone)]
pub struct PlayerClient {
    client: Client,
    base_url: String,
}

impl PlayerClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search: validate, then fetch stats and a fact concurrently.
    pub async fn search(&self, raw_name: &str) -> Result<Report, ClientError> {
        let player = PlayerName::new(raw_name).map_err(|e| ClientError::Api(e.into()))?;

        let (stats, fact) = tokio::join!(self.fetch_hiscores(&player), self.fetch_fact());

        Ok(Report {
            stats: stats?,
            fact,
        })
    }

    pub async fn fetch_hiscores(&self, player: &PlayerName) -> Result<HiscoreView, ClientError> {
        let request = self
            .client
            .get(format!("{}/hiscores", self.base_url))
            .query(&[("player", player.as_str())]);
        let raw = send(request).await?;

        normalize(&raw, player.as_str()).map_err(|e| {
            tracing::warn!(player = %player, error = %e, "Hiscore data rejected");
            ClientError::Api(ErrorKind::from(&e))
        })
    }

    pub async fn fetch_fact(&self) -> Result<String, ClientError> {
        let raw = send(self.client.get(format!("{}/catfacts", self.base_url))).await?;
        extract_fact(&raw).ok_or(ClientError::Api(ErrorKind::InvalidData))
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Body is best-effort: proxies in front of the relay may not send JSON.
    let body = response.json::<ErrorBody>().await.ok();
    tracing::debug!(status = %status, error = ?body, "Relay returned an error");
    Err(ClientError::Api(ErrorKind::from_response(
        status.as_u16(),
        body.as_ref(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use osrelay_domain::ValidationError;
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn_engine(router: Router) -> PlayerClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        PlayerClient::new(Client::new(), &format!("http://{addr}/"))
    }

    fn hiscores_ok() -> Router {
        Router::new().route(
            "/hiscores",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "name": q.get("player"),
                    "skills": [
                        { "rank": 10, "level": 2277, "xp": 4_600_000_000i64 },
                        { "rank": 20, "level": 99, "xp": 200_000_000 }
                    ]
                }))
            }),
        )
    }

    #[tokio::test]
    async fn test_search_prints_stats_and_fact() {
        let router = hiscores_ok().route(
            "/catfacts",
            get(|| async { Json(json!({ "fact": "Cats walk like camels." })) }),
        );
        let client = spawn_engine(router).await;

        let report = client.search("My Name").await.unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "Stats for My Name".to_string(),
                "Overall: Level 2277 (Rank: 10), XP: 4600000000".to_string(),
                "Attack: Level 99 (Rank: 20), XP: 200000000".to_string(),
                String::new(),
                "Cat Fact: Cats walk like camels.".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_fact_does_not_hide_stats() {
        let router = hiscores_ok().route(
            "/catfacts",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cat fact" })),
                )
            }),
        );
        let client = spawn_engine(router).await;

        let report = client.search("Zezima").await.unwrap();
        assert_eq!(report.stats.skills.len(), 2);
        assert!(report.lines().last().unwrap().starts_with("Failed to load cat fact:"));
    }

    #[tokio::test]
    async fn test_invalid_name_is_rejected_locally() {
        // Nothing listens here; validation must fail before any request.
        let client = PlayerClient::new(Client::new(), "http://127.0.0.1:9");

        let err = client.search("Te$t").await.unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Validation(ValidationError::InvalidFormat)
        );
    }

    #[tokio::test]
    async fn test_not_found_maps_to_sentence() {
        let router = Router::new()
            .route(
                "/hiscores",
                get(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": "Player not found" })),
                    )
                }),
            )
            .route("/catfacts", get(|| async { Json(json!({ "fact": "x" })) }));
        let client = spawn_engine(router).await;

        let err = client.search("nobody").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "That player could not be found on the hiscores"
        );
    }

    #[tokio::test]
    async fn test_missing_skills_is_invalid_data() {
        let router = Router::new()
            .route("/hiscores", get(|| async { Json(json!({ "name": "Zezima" })) }))
            .route("/catfacts", get(|| async { Json(json!({ "fact": "x" })) }));
        let client = spawn_engine(router).await;

        let err = client.search("Zezima").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = PlayerClient::new(Client::new(), &format!("http://{addr}"));

        let err = client.search("Zezima").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }
}
