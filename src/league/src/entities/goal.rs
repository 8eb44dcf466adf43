use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GoalType {
    #[default]
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "PENALTI")]
    Penalty,
    #[serde(rename = "FALTA")]
    FreeKick,
    #[serde(rename = "CONTRA")]
    OwnGoal,
}

impl GoalType {
    pub const ALL: [GoalType; 4] = [
        GoalType::Normal,
        GoalType::Penalty,
        GoalType::FreeKick,
        GoalType::OwnGoal,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            GoalType::Normal => "NORMAL",
            GoalType::Penalty => "PENALTI",
            GoalType::FreeKick => "FALTA",
            GoalType::OwnGoal => "CONTRA",
        }
    }

    pub fn as_i18n_key(&self) -> &'static str {
        match self {
            GoalType::Normal => "goal_normal",
            GoalType::Penalty => "goal_penalty",
            GoalType::FreeKick => "goal_free_kick",
            GoalType::OwnGoal => "goal_own_goal",
        }
    }
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::ALL
            .iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown goal type: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub match_id: u32,
    pub player_id: u32,
    pub team_id: u32,
    pub minute: u8,
    pub goal_type: GoalType,
    pub own_goal: bool,
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Own goals count for the credited team's score but never for a scorer tally.
    #[inline]
    pub fn is_own_goal(&self) -> bool {
        self.own_goal
    }
}

impl PartialEq for Goal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
