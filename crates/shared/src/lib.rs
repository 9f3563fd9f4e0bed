//! osrelay Shared - types shared between the Engine (relay) and Player (client).
//!
//! - `dto` - request query strings and the `{error}` response body
//! - `responses` - display-side normalization of hiscore bodies
//! - `fact` - fact text extraction
//! - `messages` - error classification and user-facing sentences

pub mod dto;
pub mod fact;
pub mod messages;
pub mod responses;

pub use dto::{ErrorBody, GainsQuery, HiscoreQuery};
pub use fact::extract_fact;
pub use messages::ErrorKind;
pub use responses::{normalize, HiscoreView, NormalizeError};
