use chrono::{NaiveDate, NaiveDateTime};
use league::{DEFAULT_NATIONALITY, DEFAULT_ROUND, GoalType, PlayerPosition};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub team_id: u32,
    pub name: String,
    #[serde(default)]
    pub number: Option<u8>,
    pub position: PlayerPosition,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct MatchEntity {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    #[serde(default)]
    pub home_goals: u8,
    #[serde(default)]
    pub away_goals: u8,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default = "default_round")]
    pub round: u16,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct GoalEntity {
    pub id: u32,
    pub match_id: u32,
    pub player_id: u32,
    pub team_id: u32,
    pub minute: u8,
    #[serde(default)]
    pub goal_type: GoalType,
    #[serde(default)]
    pub own_goal: bool,
}

fn default_nationality() -> String {
    DEFAULT_NATIONALITY.to_string()
}

fn default_active() -> bool {
    true
}

fn default_round() -> u16 {
    DEFAULT_ROUND
}
