use crate::entities::{Goal, Match, Player, Team};
use crate::query::{next_fixtures, recent_results};
use crate::scorers::{DEFAULT_LEADERBOARD_SIZE, PlayerScorer, compute_player_leaderboard};
use chrono::NaiveDateTime;

/// Dashboard overview of the whole league.
#[derive(Debug, Clone)]
pub struct LeagueSummary<'d> {
    pub total_teams: usize,
    pub total_players: usize,
    pub total_matches: usize,
    pub total_goals: usize,
    pub recent_matches: Vec<&'d Match>,
    pub upcoming_matches: Vec<&'d Match>,
    pub top_scorers: Vec<PlayerScorer>,
}

impl<'d> LeagueSummary<'d> {
    pub fn build(
        teams: &'d [Team],
        players: &'d [Player],
        matches: &'d [Match],
        goals: &'d [Goal],
        now: NaiveDateTime,
    ) -> Self {
        let mut top_scorers = compute_player_leaderboard(goals);
        top_scorers.truncate(DEFAULT_LEADERBOARD_SIZE);

        LeagueSummary {
            total_teams: teams.len(),
            total_players: players.len(),
            total_matches: matches.len(),
            total_goals: goals.iter().filter(|g| !g.is_own_goal()).count(),
            recent_matches: recent_results(matches, None, DEFAULT_LEADERBOARD_SIZE),
            upcoming_matches: next_fixtures(matches, None, now, DEFAULT_LEADERBOARD_SIZE),
            top_scorers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GoalType;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, day)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap()
    }

    fn team(id: u32) -> Team {
        Team::new(id, format!("Team {}", id), None, at(1))
    }

    fn game(id: u32, day: u32, completed: bool) -> Match {
        Match {
            id,
            home_team_id: 1,
            away_team_id: 2,
            home_goals: 1,
            away_goals: 1,
            date: at(day),
            venue: None,
            round: id as u16,
            completed,
        }
    }

    fn goal(id: u32, player_id: u32, own_goal: bool) -> Goal {
        Goal {
            id,
            match_id: 1,
            player_id,
            team_id: 1,
            minute: 30,
            goal_type: GoalType::Normal,
            own_goal,
            created_at: at(1),
        }
    }

    #[test]
    fn summary_counts_and_slices() {
        let teams = vec![team(1), team(2)];
        let matches: Vec<Match> = (1..=8).map(|id| game(id, id, id <= 6)).collect();
        let goals: Vec<Goal> = (1..=7)
            .map(|id| goal(id, id, id == 7))
            .collect();

        let summary = LeagueSummary::build(&teams, &[], &matches, &goals, at(7));

        assert_eq!(summary.total_teams, 2);
        assert_eq!(summary.total_players, 0);
        assert_eq!(summary.total_matches, 8);
        assert_eq!(summary.total_goals, 6);

        let recent: Vec<u32> = summary.recent_matches.iter().map(|m| m.id).collect();
        assert_eq!(recent, vec![6, 5, 4, 3, 2]);

        let upcoming: Vec<u32> = summary.upcoming_matches.iter().map(|m| m.id).collect();
        assert_eq!(upcoming, vec![7, 8]);

        assert_eq!(summary.top_scorers.len(), DEFAULT_LEADERBOARD_SIZE);
        assert_eq!(summary.top_scorers[0].player_id, 1);
    }
}
