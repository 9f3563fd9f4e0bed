//! Player gains lookup use case.

use std::sync::Arc;

use osrelay_domain::{GainsWindow, PlayerName};

use super::error::LookupError;
use crate::infrastructure::ports::{GainsPort, RelayBody};

/// Validate a player name and window, then relay the gains lookup.
pub struct LookupGains {
    gains: Arc<dyn GainsPort>,
}

impl LookupGains {
    pub fn new(gains: Arc<dyn GainsPort>) -> Self {
        Self { gains }
    }

    /// The player is validated before the window, so a request with both wrong
    /// reports the player problem.
    pub async fn execute(
        &self,
        player: Option<&str>,
        window: Option<&str>,
    ) -> Result<RelayBody, LookupError> {
        let player = PlayerName::from_optional(player)?;
        let window = GainsWindow::from_optional(window)?;
        tracing::info!(player = %player, window = %window, "Looking up player gains");

        self.gains
            .fetch_gains(&player, window)
            .await
            .map_err(|e| {
                tracing::warn!(player = %player, error = %e, "Gains lookup failed");
                LookupError::from(e)
            })
    }
}
