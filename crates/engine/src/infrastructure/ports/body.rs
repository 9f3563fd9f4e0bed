//! Upstream response bodies.

use serde_json::value::RawValue;

use super::error::RelayError;

/// A JSON body exactly as the upstream sent it.
///
/// The bytes are checked to be JSON on receipt and never re-encoded, so key
/// order, number spelling, and integer precision survive the relay. Only
/// whitespace around the top-level value is dropped.
#[derive(Debug, Clone)]
pub struct RelayBody(Box<RawValue>);

impl RelayBody {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice::<Box<RawValue>>(bytes)
            .map(Self)
            .map_err(|e| RelayError::InvalidData(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub fn into_string(self) -> String {
        Box::<str>::from(self.0).into_string()
    }
}

impl PartialEq for RelayBody {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RelayBody {}
