use crate::entities::{Player, PlayerPosition};
use crate::query::params::lenient;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerStatusFilter {
    Active,
    Inactive,
}

impl FromStr for PlayerStatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ativo" | "active" => Ok(PlayerStatusFilter::Active),
            "inativo" | "inactive" => Ok(PlayerStatusFilter::Inactive),
            other => Err(format!("unknown player status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerQueryParams {
    #[serde(alias = "time")]
    pub team: Option<String>,
    #[serde(alias = "posicao")]
    pub position: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "busca")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub team_id: Option<u32>,
    pub position: Option<PlayerPosition>,
    pub status: Option<PlayerStatusFilter>,
    /// Lowercased search needle.
    pub search: Option<String>,
}

impl PlayerFilter {
    pub fn from_params(params: &PlayerQueryParams) -> Self {
        PlayerFilter {
            team_id: lenient("team", params.team.as_deref()),
            position: lenient("position", params.position.as_deref()),
            status: lenient("status", params.status.as_deref()),
            search: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// `team_name` is the name of the player's team, searched alongside the player name.
    pub fn accepts(&self, player: &Player, team_name: &str) -> bool {
        if self.team_id.is_some_and(|id| player.team_id != id) {
            return false;
        }

        if self.position.is_some_and(|p| player.position != p) {
            return false;
        }

        match self.status {
            Some(PlayerStatusFilter::Active) if !player.active => return false,
            Some(PlayerStatusFilter::Inactive) if player.active => return false,
            _ => {}
        }

        if let Some(needle) = &self.search {
            let in_name = player.name.to_lowercase().contains(needle);
            let in_team = team_name.to_lowercase().contains(needle);

            if !in_name && !in_team {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn player(team_id: u32, name: &str, position: PlayerPosition, active: bool) -> Player {
        Player {
            id: 1,
            name: name.to_string(),
            team_id,
            number: Some(9),
            position,
            photo: None,
            birth_date: None,
            nationality: "Brasileiro".to_string(),
            active,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn filter(
        team: Option<&str>,
        position: Option<&str>,
        status: Option<&str>,
        search: Option<&str>,
    ) -> PlayerFilter {
        PlayerFilter::from_params(&PlayerQueryParams {
            team: team.map(String::from),
            position: position.map(String::from),
            status: status.map(String::from),
            search: search.map(String::from),
        })
    }

    #[test]
    fn invalid_values_are_dropped() {
        let f = filter(Some("x"), Some("striker"), Some("retired"), Some("  "));

        assert_eq!(f, PlayerFilter::default());
    }

    #[test]
    fn status_and_position_filters() {
        let striker = player(1, "Gabriel", PlayerPosition::Forward, true);
        let keeper = player(1, "Rossi", PlayerPosition::Goalkeeper, false);

        let active_forwards = filter(None, Some("ATA"), Some("ativo"), None);
        assert!(active_forwards.accepts(&striker, "Flamengo"));
        assert!(!active_forwards.accepts(&keeper, "Flamengo"));

        let inactive = filter(None, None, Some("inativo"), None);
        assert!(inactive.accepts(&keeper, "Flamengo"));
        assert!(!inactive.accepts(&striker, "Flamengo"));
    }

    #[test]
    fn search_looks_at_player_and_team_names() {
        let striker = player(2, "Gabriel Barbosa", PlayerPosition::Forward, true);

        assert!(filter(None, None, None, Some("barb")).accepts(&striker, "Flamengo"));
        assert!(filter(None, None, None, Some("FLAM")).accepts(&striker, "Flamengo"));
        assert!(!filter(None, None, None, Some("santos")).accepts(&striker, "Flamengo"));
    }

    #[test]
    fn team_filter() {
        let striker = player(2, "Pedro", PlayerPosition::Forward, true);

        assert!(filter(Some("2"), None, None, None).accepts(&striker, ""));
        assert!(!filter(Some("3"), None, None, None).accepts(&striker, ""));
        assert!(filter(Some("todos"), None, None, None).accepts(&striker, ""));
    }
}
