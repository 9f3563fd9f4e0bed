//! Skill catalog and per-skill hiscore entries.
//!
//! The upstream hiscore API returns skills as a positional array. Position is
//! the only correlation key: entry `i` belongs to `SKILL_NAMES[i]`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Skill names in upstream array order.
pub const SKILL_NAMES: [&str; 24] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecraft",
    "Hunter",
    "Construction",
];

/// Name for the skill at `index`, or a placeholder past the end of the catalog.
pub fn skill_name_at(index: usize) -> Cow<'static, str> {
    match SKILL_NAMES.get(index) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Unknown Skill{index}")),
    }
}

/// One row of a player's hiscores.
///
/// Ranks and levels are passed through as reported; upstream uses `-1` for
/// unranked skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub rank: i64,
    pub level: i64,
    pub experience: i64,
}

impl SkillEntry {
    pub fn new(index: usize, rank: i64, level: i64, experience: i64) -> Self {
        Self {
            name: skill_name_at(index).into_owned(),
            rank,
            level,
            experience,
        }
    }
}

impl fmt::Display for SkillEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Level {} (Rank: {}), XP: {}",
            self.name, self.level, self.rank, self.experience
        )
    }
}
