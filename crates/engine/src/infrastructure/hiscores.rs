//! Old School RuneScape hiscores client.
//!
//! Implements `HiscorePort` against the `index_lite.json` endpoint.

use async_trait::async_trait;
use reqwest::Client;

use osrelay_domain::PlayerName;

use crate::infrastructure::ports::{HiscorePort, RelayBody, RelayError};
use crate::infrastructure::upstream::{relay_json, trim_base_url};

/// Default hiscores base URL.
pub const DEFAULT_HISCORES_BASE_URL: &str = "https://secure.runescape.com/m=hiscore_oldschool";

/// Client for the hiscores JSON API
#[derive(Clone)]
pub struct HiscoresClient {
    client: Client,
    base_url: String,
}

impl HiscoresClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }
}

#[async_trait]
impl HiscorePort for HiscoresClient {
    async fn fetch_stats(&self, player: &PlayerName) -> Result<RelayBody, RelayError> {
        let url = format!("{}/index_lite.json", self.base_url);
        tracing::debug!(player = %player, url = %url, "Requesting hiscores");

        relay_json(self.client.get(url).query(&[("player", player.as_str())])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Query, RawQuery},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    use crate::test_fixtures::{body_json, spawn_upstream, test_client};

    fn echo_upstream() -> Router {
        Router::new().route(
            "/hiscore/index_lite.json",
            get(
                |Query(params): Query<HashMap<String, String>>, RawQuery(raw): RawQuery| async move {
                    let player = params.get("player").cloned().unwrap_or_default();
                    if player == "nobody" {
                        return Err(axum::http::StatusCode::NOT_FOUND);
                    }
                    Ok(Json(json!({
                        "name": player,
                        "raw_query": raw,
                        "skills": [{ "id": 0, "name": "Overall", "rank": 1, "level": 2277, "xp": 4600000000i64 }]
                    })))
                },
            ),
        )
    }

    #[tokio::test]
    async fn test_name_with_space_round_trips() {
        let base = spawn_upstream(echo_upstream()).await;
        let client = HiscoresClient::new(test_client(), &format!("{base}/hiscore/"));

        let player = PlayerName::new("My Name").unwrap();
        let body = body_json(&client.fetch_stats(&player).await.unwrap());

        assert_eq!(body["name"], "My Name");
        let raw = body["raw_query"].as_str().unwrap();
        assert!(!raw.contains(' '), "query was not encoded: {raw}");
    }

    #[tokio::test]
    async fn test_body_passes_through() {
        let base = spawn_upstream(echo_upstream()).await;
        let client = HiscoresClient::new(test_client(), &format!("{base}/hiscore"));

        let body = client
            .fetch_stats(&PlayerName::new("Zezima").unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(&body)["skills"][0]["xp"], 4_600_000_000i64);
    }

    #[tokio::test]
    async fn test_unknown_player_is_not_found() {
        let base = spawn_upstream(echo_upstream()).await;
        let client = HiscoresClient::new(test_client(), &format!("{base}/hiscore"));

        let result = client.fetch_stats(&PlayerName::new("nobody").unwrap()).await;
        assert_eq!(result, Err(RelayError::NotFound));
    }
}
