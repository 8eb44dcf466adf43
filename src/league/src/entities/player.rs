use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_NATIONALITY: &str = "Brasileiro";

/// Squad role. Declaration order is the order squads are listed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "GOL")]
    Goalkeeper,
    #[serde(rename = "ZAG")]
    Defender,
    #[serde(rename = "LAT")]
    Fullback,
    #[serde(rename = "VOL")]
    DefensiveMidfielder,
    #[serde(rename = "MEI")]
    Midfielder,
    #[serde(rename = "ATA")]
    Forward,
    #[serde(rename = "TEC")]
    Coach,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 7] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Fullback,
        PlayerPosition::DefensiveMidfielder,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
        PlayerPosition::Coach,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GOL",
            PlayerPosition::Defender => "ZAG",
            PlayerPosition::Fullback => "LAT",
            PlayerPosition::DefensiveMidfielder => "VOL",
            PlayerPosition::Midfielder => "MEI",
            PlayerPosition::Forward => "ATA",
            PlayerPosition::Coach => "TEC",
        }
    }

    pub fn as_i18n_key(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "position_goalkeeper",
            PlayerPosition::Defender => "position_defender",
            PlayerPosition::Fullback => "position_fullback",
            PlayerPosition::DefensiveMidfielder => "position_defensive_midfielder",
            PlayerPosition::Midfielder => "position_midfielder",
            PlayerPosition::Forward => "position_forward",
            PlayerPosition::Coach => "position_coach",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerPosition::ALL
            .iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown position code: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub team_id: u32,
    pub number: Option<u8>,
    pub position: PlayerPosition,
    pub photo: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
