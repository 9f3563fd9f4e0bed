//! Error types for the domain layer.
//!
//! Validation errors carry the exact messages returned to API callers, so the
//! `Display` output here is part of the wire contract.

use thiserror::Error;

/// Why a candidate input was rejected before any network call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Absent, or empty after trimming.
    #[error("Player name is required")]
    Missing,

    /// Longer than [`crate::MAX_PLAYER_NAME_LENGTH`] characters after trimming.
    #[error("Player name cannot be longer than 12 characters")]
    TooLong,

    /// Contains a character outside letters, digits, whitespace, `_` and `-`.
    #[error("Invalid player name format")]
    InvalidFormat,

    /// Gains window is not one of the supported values.
    #[error("Unknown time window")]
    UnknownWindow,

    /// Query string could not be read, e.g. a repeated parameter.
    #[error("Invalid query string")]
    MalformedQuery,
}

impl ValidationError {
    /// Stable machine-readable code, used by clients to pick a user message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::TooLong => "too_long",
            Self::InvalidFormat => "invalid_format",
            Self::UnknownWindow => "unknown_window",
            Self::MalformedQuery => "malformed_query",
        }
    }

    /// Inverse of [`ValidationError::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "missing" => Some(Self::Missing),
            "too_long" => Some(Self::TooLong),
            "invalid_format" => Some(Self::InvalidFormat),
            "unknown_window" => Some(Self::UnknownWindow),
            "malformed_query" => Some(Self::MalformedQuery),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(ValidationError::Missing.to_string(), "Player name is required");
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Player name cannot be longer than 12 characters"
        );
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "Invalid player name format"
        );
    }

    #[test]
    fn test_from_code_inverts_code() {
        for err in [
            ValidationError::Missing,
            ValidationError::TooLong,
            ValidationError::InvalidFormat,
            ValidationError::UnknownWindow,
            ValidationError::MalformedQuery,
        ] {
            assert_eq!(ValidationError::from_code(err.code()), Some(err));
        }
        assert_eq!(ValidationError::from_code("nope"), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ValidationError::Missing.code(),
            ValidationError::TooLong.code(),
            ValidationError::InvalidFormat.code(),
            ValidationError::UnknownWindow.code(),
            ValidationError::MalformedQuery.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
