//! Wire-format DTOs for the relay's HTTP endpoints.

use serde::{Deserialize, Serialize};

use osrelay_domain::ValidationError;

/// Body of every non-2xx response: `{"error": "..."}`.
///
/// `code` is set for validation failures so clients can choose their own
/// wording without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn validation(err: ValidationError) -> Self {
        Self {
            error: err.to_string(),
            code: Some(err.code().to_string()),
        }
    }
}

/// Query string for `GET /hiscores`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HiscoreQuery {
    #[serde(default)]
    pub player: Option<String>,
}

/// Query string for `GET /templeosrs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GainsQuery {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}
