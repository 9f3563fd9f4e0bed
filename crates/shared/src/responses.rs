//! Display-side normalization of hiscore lookups.
//!
//! The relay passes the upstream body through untouched; this module turns it
//! into an ordered list of [`SkillEntry`] values. Skills are matched to the
//! catalog by array position only. Upstream entries also carry a `name`, but
//! it is ignored so the catalog stays the single source of skill names.

use serde::Deserialize;
use serde_json::Value;

use osrelay_domain::{SkillEntry, SKILL_NAMES};

/// Why a hiscore body could not be normalized. Every variant is "invalid data"
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid or missing skills data from API")]
    MissingSkills,

    #[error("Invalid or missing skills data from API")]
    EmptySkills,

    #[error("Malformed hiscore data: {0}")]
    Malformed(String),
}

/// A player's hiscores ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiscoreView {
    pub display_name: String,
    pub skills: Vec<SkillEntry>,
}

impl HiscoreView {
    /// Header line followed by one line per skill.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(format!("Stats for {}", self.display_name))
            .chain(self.skills.iter().map(ToString::to_string))
            .collect()
    }
}

#[derive(Deserialize)]
struct RawHiscores {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    skills: Option<Value>,
}

/// Upstream sends `xp`. `experience` is accepted too; `xp` wins when both are
/// present.
#[derive(Deserialize)]
struct RawSkill {
    rank: i64,
    level: i64,
    #[serde(default)]
    xp: Option<i64>,
    #[serde(default)]
    experience: Option<i64>,
}

impl RawSkill {
    fn into_entry(self, index: usize) -> Result<SkillEntry, NormalizeError> {
        let experience = self.xp.or(self.experience).ok_or_else(|| {
            NormalizeError::Malformed(format!("skill {index}: missing field `xp`"))
        })?;
        Ok(SkillEntry::new(index, self.rank, self.level, experience))
    }
}

/// Normalize a raw hiscore body.
///
/// `fallback_name` is used when the body carries no display name.
pub fn normalize(raw: &Value, fallback_name: &str) -> Result<HiscoreView, NormalizeError> {
    let hiscores =
        RawHiscores::deserialize(raw).map_err(|e| NormalizeError::Malformed(e.to_string()))?;

    let entries = match hiscores.skills {
        Some(Value::Array(entries)) => entries,
        _ => return Err(NormalizeError::MissingSkills),
    };
    if entries.is_empty() {
        return Err(NormalizeError::EmptySkills);
    }

    if entries.len() > SKILL_NAMES.len() {
        tracing::warn!(
            received = entries.len(),
            known = SKILL_NAMES.len(),
            "Upstream returned more skills than the catalog knows"
        );
    }

    let skills = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            RawSkill::deserialize(entry)
                .map_err(|e| NormalizeError::Malformed(format!("skill {index}: {e}")))?
                .into_entry(index)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let display_name = hiscores
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    Ok(HiscoreView {
        display_name,
        skills,
    })
}
