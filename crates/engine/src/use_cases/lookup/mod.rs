//! Lookup use cases: validate input, then relay to one upstream service.

mod error;
mod facts;
mod gains;
mod hiscores;

pub use error::LookupError;
pub use facts::FetchFact;
pub use gains::LookupGains;
pub use hiscores::LookupHiscores;

/// Container for the lookup use cases.
pub struct LookupUseCases {
    pub hiscores: LookupHiscores,
    pub gains: LookupGains,
    pub facts: FetchFact,
}
