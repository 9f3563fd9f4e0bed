//! TempleOSRS player gains client.

use async_trait::async_trait;
use reqwest::Client;

use osrelay_domain::{GainsWindow, PlayerName};

use crate::infrastructure::ports::{GainsPort, RelayBody, RelayError};
use crate::infrastructure::upstream::{relay_json, trim_base_url};

/// Default TempleOSRS API base URL.
pub const DEFAULT_TEMPLE_BASE_URL: &str = "https://templeosrs.com/api";

#[derive(Clone)]
pub struct TempleClient {
    client: Client,
    base_url: String,
}

impl TempleClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }
}

#[async_trait]
impl GainsPort for TempleClient {
    async fn fetch_gains(
        &self,
        player: &PlayerName,
        window: GainsWindow,
    ) -> Result<RelayBody, RelayError> {
        let url = format!("{}/player_gains.php", self.base_url);
        tracing::debug!(player = %player, window = %window, "Requesting player gains");

        relay_json(
            self.client
                .get(url)
                .query(&[("player", player.as_str()), ("time", window.as_str())]),
        )
        .await
    }
}
