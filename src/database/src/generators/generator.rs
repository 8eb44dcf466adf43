use crate::DatabaseEntity;
use crate::loaders::{GoalEntity, MatchEntity, PlayerEntity, TeamEntity};
use crate::store::LeagueData;
use chrono::{Local, NaiveDateTime};
use league::{Goal, GoalType, Match, Player, Team};
use log::warn;
use std::collections::HashSet;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the in-memory league from seed rows, skipping rows with broken references.
    pub fn generate(data: &DatabaseEntity) -> LeagueData {
        Self::generate_at(data, Local::now().naive_local())
    }

    pub fn generate_at(data: &DatabaseEntity, seeded_at: NaiveDateTime) -> LeagueData {
        let teams = Self::generate_teams(&data.teams, seeded_at);
        let team_ids: HashSet<u32> = teams.iter().map(|t| t.id).collect();

        let players = Self::generate_players(&data.players, &team_ids, seeded_at);
        let player_ids: HashSet<u32> = players.iter().map(|p| p.id).collect();

        let matches = Self::generate_matches(&data.matches, &team_ids);
        let match_ids: HashSet<u32> = matches.iter().map(|m| m.id).collect();

        let goals = Self::generate_goals(
            &data.goals,
            &match_ids,
            &player_ids,
            &team_ids,
            seeded_at,
        );

        LeagueData::new(teams, players, matches, goals)
    }

    fn generate_teams(rows: &[TeamEntity], seeded_at: NaiveDateTime) -> Vec<Team> {
        let mut seen = HashSet::with_capacity(rows.len());

        rows.iter()
            .filter(|t| {
                let fresh = seen.insert(t.id);
                if !fresh {
                    warn!("seed: duplicate team id {}, skipped", t.id);
                }
                fresh
            })
            .map(|t| Team::new(t.id, t.name.trim().to_string(), t.logo.clone(), seeded_at))
            .collect()
    }

    fn generate_players(
        rows: &[PlayerEntity],
        team_ids: &HashSet<u32>,
        seeded_at: NaiveDateTime,
    ) -> Vec<Player> {
        let mut seen = HashSet::with_capacity(rows.len());

        rows.iter()
            .filter(|p| {
                if !team_ids.contains(&p.team_id) {
                    warn!("seed: player {} references unknown team {}, skipped", p.id, p.team_id);
                    return false;
                }
                if !seen.insert(p.id) {
                    warn!("seed: duplicate player id {}, skipped", p.id);
                    return false;
                }
                true
            })
            .map(|p| Player {
                id: p.id,
                name: p.name.trim().to_string(),
                team_id: p.team_id,
                number: p.number,
                position: p.position,
                photo: p.photo.clone(),
                birth_date: p.birth_date,
                nationality: p.nationality.clone(),
                active: p.active,
                created_at: seeded_at,
            })
            .collect()
    }

    fn generate_matches(rows: &[MatchEntity], team_ids: &HashSet<u32>) -> Vec<Match> {
        let mut seen = HashSet::with_capacity(rows.len());

        rows.iter()
            .filter(|m| {
                if m.home_team_id == m.away_team_id {
                    warn!("seed: match {} has the same home and away team, skipped", m.id);
                    return false;
                }
                if !team_ids.contains(&m.home_team_id) || !team_ids.contains(&m.away_team_id) {
                    warn!("seed: match {} references an unknown team, skipped", m.id);
                    return false;
                }
                if !seen.insert(m.id) {
                    warn!("seed: duplicate match id {}, skipped", m.id);
                    return false;
                }
                true
            })
            .map(|m| Match {
                id: m.id,
                home_team_id: m.home_team_id,
                away_team_id: m.away_team_id,
                home_goals: m.home_goals,
                away_goals: m.away_goals,
                date: m.date,
                venue: m.venue.clone(),
                round: m.round,
                completed: m.completed,
            })
            .collect()
    }

    fn generate_goals(
        rows: &[GoalEntity],
        match_ids: &HashSet<u32>,
        player_ids: &HashSet<u32>,
        team_ids: &HashSet<u32>,
        seeded_at: NaiveDateTime,
    ) -> Vec<Goal> {
        let mut seen = HashSet::with_capacity(rows.len());

        rows.iter()
            .filter(|g| {
                let linked = match_ids.contains(&g.match_id)
                    && player_ids.contains(&g.player_id)
                    && team_ids.contains(&g.team_id);

                if !linked {
                    warn!("seed: goal {} has a dangling reference, skipped", g.id);
                    return false;
                }
                if !seen.insert(g.id) {
                    warn!("seed: duplicate goal id {}, skipped", g.id);
                    return false;
                }
                true
            })
            .map(|g| Goal {
                id: g.id,
                match_id: g.match_id,
                player_id: g.player_id,
                team_id: g.team_id,
                minute: g.minute,
                goal_type: g.goal_type,
                own_goal: g.own_goal || g.goal_type == GoalType::OwnGoal,
                created_at: seeded_at,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use crate::store::TeamDraft;
    use league::compute_standings;

    fn generate(json: &str) -> LeagueData {
        DatabaseGenerator::generate(&DatabaseLoader::from_json(json).unwrap())
    }

    #[test]
    fn bundled_seed_generates_every_row() {
        let entity = DatabaseLoader::load().unwrap();
        let data = DatabaseGenerator::generate(&entity);

        assert_eq!(data.teams().len(), entity.teams.len());
        assert_eq!(data.players().len(), entity.players.len());
        assert_eq!(data.matches().len(), entity.matches.len());
        assert_eq!(data.goals().len(), entity.goals.len());
    }

    #[test]
    fn bundled_seed_produces_a_table() {
        let data = DatabaseGenerator::generate(&DatabaseLoader::load().unwrap());

        let table = compute_standings(data.teams().iter().map(|t| t.id), data.matches());

        assert_eq!(table.len(), data.teams().len());
        assert!(table.iter().any(|s| s.played > 0));
    }

    #[test]
    fn broken_rows_are_skipped() {
        let data = generate(
            r#"{
                "teams": [{ "id": 1, "name": "Bahia" }, { "id": 2, "name": "Sport" }, { "id": 1, "name": "Dup" }],
                "players": [
                    { "id": 1, "team_id": 1, "name": "Everaldo", "position": "ATA" },
                    { "id": 2, "team_id": 9, "name": "Ghost", "position": "ZAG" }
                ],
                "matches": [
                    { "id": 1, "home_team_id": 1, "away_team_id": 2, "date": "2025-01-01T16:00:00" },
                    { "id": 2, "home_team_id": 1, "away_team_id": 1, "date": "2025-01-02T16:00:00" },
                    { "id": 3, "home_team_id": 1, "away_team_id": 7, "date": "2025-01-03T16:00:00" }
                ],
                "goals": [
                    { "id": 1, "match_id": 1, "player_id": 1, "team_id": 1, "minute": 12 },
                    { "id": 2, "match_id": 2, "player_id": 1, "team_id": 1, "minute": 30 }
                ]
            }"#,
        );

        assert_eq!(data.teams().len(), 2);
        assert_eq!(data.team_name(1), "Bahia");
        assert_eq!(data.players().len(), 1);
        assert_eq!(data.matches().len(), 1);
        assert_eq!(data.goals().len(), 1);
    }

    #[test]
    fn own_goal_type_is_flagged() {
        let data = generate(
            r#"{
                "teams": [{ "id": 1, "name": "Bahia" }, { "id": 2, "name": "Sport" }],
                "players": [{ "id": 1, "team_id": 1, "name": "Everaldo", "position": "ATA" }],
                "matches": [{ "id": 1, "home_team_id": 1, "away_team_id": 2, "date": "2025-01-01T16:00:00" }],
                "goals": [{ "id": 1, "match_id": 1, "player_id": 1, "team_id": 2, "minute": 3, "goal_type": "CONTRA" }]
            }"#,
        );

        assert!(data.goals()[0].own_goal);
    }

    #[test]
    fn new_rows_continue_seed_identifiers() {
        let mut data = DatabaseGenerator::generate(&DatabaseLoader::load().unwrap());
        let max_id = data.teams().iter().map(|t| t.id).max().unwrap();

        let id = data
            .create_team(TeamDraft {
                name: "Juventude".to_string(),
                logo: None,
            })
            .unwrap();

        assert_eq!(id, max_id + 1);
    }
}
