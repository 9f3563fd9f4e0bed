//! osrelay Engine library.
//!
//! Relays the hiscores, player-gains, and fact APIs to browser clients.
//!
//! ## Structure
//!
//! - `use_cases/` - input validation and relay orchestration
//! - `infrastructure/` - upstream clients (ports + adapters) and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Fake upstream servers for HTTP client tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
