//! Upstream service port traits.
//!
//! Each relay talks to exactly one upstream. Bodies come back as the
//! upstream's own bytes, checked to be JSON and otherwise untouched.

use async_trait::async_trait;

use osrelay_domain::{GainsWindow, PlayerName};

use super::body::RelayBody;
use super::error::RelayError;

/// Skill hiscores keyed by player name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HiscorePort: Send + Sync {
    async fn fetch_stats(&self, player: &PlayerName) -> Result<RelayBody, RelayError>;
}

/// Experience gains for a player over a time window.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GainsPort: Send + Sync {
    async fn fetch_gains(
        &self,
        player: &PlayerName,
        window: GainsWindow,
    ) -> Result<RelayBody, RelayError>;
}

/// A random fact. No input, no status special-casing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactPort: Send + Sync {
    async fn fetch_fact(&self) -> Result<RelayBody, RelayError>;
}
