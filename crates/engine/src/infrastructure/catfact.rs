//! Cat fact client.
//!
//! The fact relay has no notion of "not found", so a 404 here is just another
//! upstream failure.

use async_trait::async_trait;
use reqwest::Client;

use crate::infrastructure::ports::{FactPort, RelayBody, RelayError};
use crate::infrastructure::upstream::{relay_json, trim_base_url};

/// Default cat fact API base URL.
pub const DEFAULT_CATFACT_BASE_URL: &str = "https://catfact.ninja";

#[derive(Clone)]
pub struct CatFactClient {
    client: Client,
    base_url: String,
}

impl CatFactClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base_url(base_url),
        }
    }
}

#[async_trait]
impl FactPort for CatFactClient {
    async fn fetch_fact(&self) -> Result<RelayBody, RelayError> {
        relay_json(self.client.get(format!("{}/fact", self.base_url)))
            .await
            .map_err(|e| match e {
                RelayError::NotFound => RelayError::Upstream(404),
                other => other,
            })
    }
}
