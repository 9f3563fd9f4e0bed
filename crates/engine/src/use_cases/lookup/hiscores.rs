//! Hiscore lookup use case.

use std::sync::Arc;

use osrelay_domain::{PlayerName, ValidationError};

use super::error::LookupError;
use crate::infrastructure::ports::{HiscorePort, RelayBody};

/// Validate a player name and relay the hiscore lookup.
///
/// When a default player is configured, an absent or empty name falls back to
/// it. A whitespace-only name is still rejected as missing.
pub struct LookupHiscores {
    hiscores: Arc<dyn HiscorePort>,
    default_player: Option<PlayerName>,
}

impl LookupHiscores {
    pub fn new(hiscores: Arc<dyn HiscorePort>, default_player: Option<PlayerName>) -> Self {
        Self {
            hiscores,
            default_player,
        }
    }

    /// Execute the lookup.
    ///
    /// # Returns
    /// * `Ok(RelayBody)` - upstream body, unchanged
    /// * `Err(LookupError::Validation)` - rejected before any network call
    /// * `Err(LookupError::Relay)` - upstream failed
    pub async fn execute(&self, player: Option<&str>) -> Result<RelayBody, LookupError> {
        let player = self.resolve_player(player)?;
        tracing::info!(player = %player, "Looking up hiscores");

        self.hiscores.fetch_stats(&player).await.map_err(|e| {
            if e.is_not_found() {
                tracing::info!(player = %player, "Player not on hiscores");
            } else {
                tracing::warn!(player = %player, error = %e, "Hiscore lookup failed");
            }
            LookupError::from(e)
        })
    }

    fn resolve_player(&self, player: Option<&str>) -> Result<PlayerName, ValidationError> {
        match (player, &self.default_player) {
            (None | Some(""), Some(default)) => Ok(default.clone()),
            (raw, _) => PlayerName::from_optional(raw),
        }
    }
}
