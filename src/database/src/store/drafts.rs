use crate::error::{StoreError, StoreResult};
use chrono::{NaiveDate, NaiveDateTime};
use league::{GoalType, PlayerPosition};
use serde::Deserialize;

/// Input for creating or editing a team.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamDraft {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TeamDraft {
    pub(crate) fn validated_name(&self) -> StoreResult<String> {
        required(&self.name, "team name is required")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub team_id: u32,
    #[serde(default)]
    pub number: Option<u8>,
    pub position: PlayerPosition,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl PlayerDraft {
    pub(crate) fn validated_name(&self) -> StoreResult<String> {
        required(&self.name, "player name is required")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDraft {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub round: Option<u16>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub home_goals: u8,
    #[serde(default)]
    pub away_goals: u8,
}

/// Final score of a played match.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResultDraft {
    pub home_goals: u8,
    pub away_goals: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalDraft {
    pub match_id: u32,
    pub player_id: u32,
    pub team_id: u32,
    pub minute: u8,
    #[serde(default)]
    pub goal_type: GoalType,
    #[serde(default)]
    pub own_goal: bool,
}

impl GoalDraft {
    /// A goal typed as own goal always carries the own-goal flag.
    pub(crate) fn is_own_goal(&self) -> bool {
        self.own_goal || self.goal_type == GoalType::OwnGoal
    }
}

fn required(value: &str, message: &str) -> StoreResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(StoreError::validation(message));
    }

    Ok(trimmed.to_string())
}

fn default_active() -> bool {
    true
}
