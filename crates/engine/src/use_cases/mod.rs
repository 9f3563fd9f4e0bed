//! Use cases - request orchestration.
//!
//! Each use case validates its input and drives one port.

pub mod lookup;

pub use lookup::{FetchFact, LookupError, LookupGains, LookupHiscores, LookupUseCases};
