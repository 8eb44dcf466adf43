use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUND: u16 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_goals: u8,
    pub away_goals: u8,
    pub date: NaiveDateTime,
    pub venue: Option<String>,
    pub round: u16,
    pub completed: bool,
}

impl Match {
    #[inline]
    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Goals (scored, conceded) from the side `team_id` played on.
    pub fn score_for(&self, team_id: u32) -> Option<(u8, u8)> {
        if self.home_team_id == team_id {
            Some((self.home_goals, self.away_goals))
        } else if self.away_team_id == team_id {
            Some((self.away_goals, self.home_goals))
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team_id: u32) -> Option<u32> {
        if self.home_team_id == team_id {
            Some(self.away_team_id)
        } else if self.away_team_id == team_id {
            Some(self.home_team_id)
        } else {
            None
        }
    }

    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.date >= now
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.date < now
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
