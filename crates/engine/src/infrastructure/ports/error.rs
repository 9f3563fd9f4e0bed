//! Error types for relay operations.

/// Failure talking to an upstream service.
///
/// Nothing here is retried. Callers only distinguish "not found" from
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// Upstream answered 404 for the requested player.
    #[error("Player not found")]
    NotFound,

    /// Upstream answered with some other non-success status.
    #[error("Upstream returned status {0}")]
    Upstream(u16),

    /// DNS, connect, timeout, or reset before a status was received.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("Upstream returned invalid data: {0}")]
    InvalidData(String),
}

impl RelayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Bodies are read as bytes and checked by [`super::RelayBody`], so every
/// client error here happened on the wire.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
