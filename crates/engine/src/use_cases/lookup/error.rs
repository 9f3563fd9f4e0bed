//! Lookup use case errors.

use osrelay_domain::ValidationError;

use crate::infrastructure::ports::RelayError;

/// Why a lookup failed: bad input (never reached upstream) or a relay failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}
