//! User-facing error sentences.
//!
//! Clients classify a failed response into an [`ErrorKind`] and show its
//! sentence. Anything unrecognized gets the generic sentence.

use osrelay_domain::ValidationError;

use crate::dto::ErrorBody;
use crate::responses::NormalizeError;

/// What went wrong, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation(ValidationError),
    NotFound,
    InvalidData,
    Unavailable,
    Unknown,
}

impl ErrorKind {
    /// Classify an error response from the relay.
    pub fn from_response(status: u16, body: Option<&ErrorBody>) -> Self {
        match status {
            400 => body
                .and_then(|b| b.code.as_deref())
                .and_then(ValidationError::from_code)
                .map_or(Self::Unknown, Self::Validation),
            404 => Self::NotFound,
            500..=599 => Self::Unavailable,
            _ => Self::Unknown,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::Missing) => "Please enter a player name",
            Self::Validation(ValidationError::TooLong) => {
                "Player names cannot be longer than 12 characters"
            }
            Self::Validation(ValidationError::InvalidFormat) => {
                "Player names can only contain letters, numbers, spaces, underscores, and hyphens"
            }
            Self::Validation(ValidationError::UnknownWindow) => {
                "Time window must be one of day, week, month, or year"
            }
            Self::Validation(ValidationError::MalformedQuery) => {
                "The request could not be read, please search again"
            }
            Self::NotFound => "That player could not be found on the hiscores",
            Self::InvalidData => "The service returned data that could not be read",
            Self::Unavailable => "The service is unavailable right now, please try again later",
            Self::Unknown => "Something went wrong, please try again",
        }
    }
}

impl From<ValidationError> for ErrorKind {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<&NormalizeError> for ErrorKind {
    fn from(_: &NormalizeError) -> Self {
        Self::InvalidData
    }
}
