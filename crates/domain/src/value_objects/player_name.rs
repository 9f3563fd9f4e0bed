//! Validated player name newtype.
//!
//! A `PlayerName` is valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Non-empty after trimming
//! - At most 12 characters after trimming
//! - Only ASCII letters, digits, whitespace, `_` and `-`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Maximum length of a player name, in characters, measured after trimming.
pub const MAX_PLAYER_NAME_LENGTH: usize = 12;

/// A validated player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate a candidate name.
    ///
    /// Checks run in order, so an overlong name with bad characters reports
    /// `TooLong`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Missing` if the name is empty after trimming
    /// - `ValidationError::TooLong` if the trimmed name exceeds 12 characters
    /// - `ValidationError::InvalidFormat` if any character is not allowed
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing);
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(ValidationError::TooLong);
        }
        if !trimmed.chars().all(is_allowed_char) {
            return Err(ValidationError::InvalidFormat);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional name, treating `None` as missing.
    pub fn from_optional(name: Option<&str>) -> Result<Self, ValidationError> {
        name.map_or(Err(ValidationError::Missing), Self::new)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '_' || c == '-'
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PlayerName {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}
