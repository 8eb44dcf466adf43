mod seed;

pub use seed::*;

use crate::DatabaseError;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const STATIC_LEAGUE_JSON: &str = include_str!("../../data/league.json");

#[derive(Debug, Default, Deserialize)]
pub struct DatabaseEntity {
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub players: Vec<PlayerEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
    #[serde(default)]
    pub goals: Vec<GoalEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the seed bundled with the binary.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Self::from_json(STATIC_LEAGUE_JSON)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<DatabaseEntity, DatabaseError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|err| DatabaseError::Io {
            path: path.display().to_string(),
            source: err,
        })?;

        info!("seed read from {}", path.display());

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<DatabaseEntity, DatabaseError> {
        let entity: DatabaseEntity = serde_json::from_str(content)?;

        info!(
            "seed parsed: {} teams, {} players, {} matches, {} goals",
            entity.teams.len(),
            entity.players.len(),
            entity.matches.len(),
            entity.goals.len()
        );

        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seed_parses() {
        let entity = DatabaseLoader::load().unwrap();

        assert!(!entity.teams.is_empty());
        assert!(!entity.matches.is_empty());
        assert!(entity.matches.iter().any(|m| m.completed));
        assert!(entity.matches.iter().any(|m| !m.completed));
    }

    #[test]
    fn defaults_are_applied() {
        let entity = DatabaseLoader::from_json(
            r#"{
                "teams": [{ "id": 1, "name": "Bahia" }],
                "players": [{ "id": 1, "team_id": 1, "name": "Everaldo", "position": "ATA" }],
                "matches": [{ "id": 1, "home_team_id": 1, "away_team_id": 2, "date": "2025-01-01T16:00:00" }]
            }"#,
        )
        .unwrap();

        let player = &entity.players[0];
        assert_eq!(player.nationality, "Brasileiro");
        assert!(player.active);
        assert_eq!(player.number, None);

        let game = &entity.matches[0];
        assert_eq!(game.round, 1);
        assert!(!game.completed);
        assert_eq!((game.home_goals, game.away_goals), (0, 0));
        assert!(entity.goals.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            DatabaseLoader::from_json("{ \"teams\": [ }"),
            Err(DatabaseError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            DatabaseLoader::load_from_path("/nonexistent/league.json"),
            Err(DatabaseError::Io { .. })
        ));
    }
}
