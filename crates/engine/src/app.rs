//! Application state and composition.

use std::sync::Arc;

use osrelay_domain::PlayerName;

use crate::infrastructure::ports::{FactPort, GainsPort, HiscorePort};
use crate::use_cases::{FetchFact, LookupGains, LookupHiscores, LookupUseCases};

/// Main application state.
///
/// Built once at startup and passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: LookupUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        hiscores: Arc<dyn HiscorePort>,
        gains: Arc<dyn GainsPort>,
        facts: Arc<dyn FactPort>,
        default_player: Option<PlayerName>,
    ) -> Self {
        Self {
            use_cases: LookupUseCases {
                hiscores: LookupHiscores::new(hiscores, default_player),
                gains: LookupGains::new(gains),
                facts: FetchFact::new(facts),
            },
        }
    }
}
