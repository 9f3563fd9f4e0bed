//! Value objects validated at construction.

mod gains_window;
mod player_name;

pub use gains_window::GainsWindow;
pub use player_name::{PlayerName, MAX_PLAYER_NAME_LENGTH};
