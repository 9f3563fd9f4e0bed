//! osrelay Domain - core vocabulary for the hiscore relay.
//!
//! - `value_objects` - validated inputs (`PlayerName`, `GainsWindow`)
//! - `skills` - the positional skill catalog and `SkillEntry`
//! - `error` - validation errors with their user-facing messages

pub mod error;
pub mod skills;
pub mod value_objects;

pub use error::ValidationError;
pub use skills::{skill_name_at, SkillEntry, SKILL_NAMES};
pub use value_objects::{GainsWindow, PlayerName, MAX_PLAYER_NAME_LENGTH};
