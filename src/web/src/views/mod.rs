use crate::I18n;
use chrono::{NaiveDate, NaiveDateTime};
use database::LeagueData;
use league::{
    Goal, Match, MatchStatus, Player, PlayerScorer, Team, TeamPerformance, TeamScorer,
    TeamStanding,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct TeamView {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
}

impl TeamView {
    pub fn new(team: &Team) -> Self {
        TeamView {
            id: team.id,
            name: team.name.clone(),
            logo: team.logo.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct StandingView {
    pub position: usize,
    pub team_id: u32,
    pub team_name: String,
    pub points: u16,
    pub played: u16,
    pub win: u16,
    pub draw: u16,
    pub lost: u16,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub efficiency: f64,
}

impl StandingView {
    /// `position` is 1-based.
    pub fn new(position: usize, performance: &TeamPerformance, data: &LeagueData) -> Self {
        let standing = &performance.standing;

        StandingView {
            position,
            team_id: standing.team_id,
            team_name: data.team_name(standing.team_id).to_string(),
            points: standing.points,
            played: standing.played,
            win: standing.win,
            draw: standing.draw,
            lost: standing.lost,
            goals_for: standing.goals_for,
            goals_against: standing.goals_against,
            goal_difference: standing.goal_difference,
            efficiency: performance.efficiency,
        }
    }

    pub fn table(standings: &[TeamStanding], data: &LeagueData) -> Vec<Self> {
        standings
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                StandingView::new(idx + 1, &TeamPerformance::from_standing(s.clone()), data)
            })
            .collect()
    }
}

#[derive(Serialize)]
pub struct MatchView {
    pub id: u32,
    pub round: u16,
    pub date: NaiveDateTime,
    pub venue: Option<String>,
    pub home_team_id: u32,
    pub home_team_name: String,
    pub away_team_id: u32,
    pub away_team_name: String,
    /// Present once the match is completed.
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub completed: bool,
    pub status: String,
}

impl MatchView {
    pub fn new(m: &Match, data: &LeagueData, i18n: &I18n, now: NaiveDateTime) -> Self {
        let score = |goals: u8| m.completed.then_some(goals);

        MatchView {
            id: m.id,
            round: m.round,
            date: m.date,
            venue: m.venue.clone(),
            home_team_id: m.home_team_id,
            home_team_name: data.team_name(m.home_team_id).to_string(),
            away_team_id: m.away_team_id,
            away_team_name: data.team_name(m.away_team_id).to_string(),
            home_goals: score(m.home_goals),
            away_goals: score(m.away_goals),
            completed: m.completed,
            status: i18n.t(MatchStatus::of(m, now).as_i18n_key()).to_string(),
        }
    }

    pub fn list(
        matches: &[&Match],
        data: &LeagueData,
        i18n: &I18n,
        now: NaiveDateTime,
    ) -> Vec<Self> {
        matches
            .iter()
            .map(|m| MatchView::new(m, data, i18n, now))
            .collect()
    }
}

#[derive(Serialize)]
pub struct PlayerView {
    pub id: u32,
    pub name: String,
    pub team_id: u32,
    pub team_name: String,
    pub number: Option<u8>,
    pub position: &'static str,
    pub position_name: String,
    pub photo: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<u32>,
    pub nationality: String,
    pub active: bool,
    pub status: String,
}

impl PlayerView {
    pub fn new(player: &Player, data: &LeagueData, i18n: &I18n, today: NaiveDate) -> Self {
        let status_key = if player.active {
            "player_active"
        } else {
            "player_inactive"
        };

        PlayerView {
            id: player.id,
            name: player.name.clone(),
            team_id: player.team_id,
            team_name: data.team_name(player.team_id).to_string(),
            number: player.number,
            position: player.position.code(),
            position_name: i18n.t(player.position.as_i18n_key()).to_string(),
            photo: player.photo.clone(),
            birth_date: player.birth_date,
            age: player.birth_date.and_then(|born| today.years_since(born)),
            nationality: player.nationality.clone(),
            active: player.active,
            status: i18n.t(status_key).to_string(),
        }
    }

    pub fn list(
        players: &[&Player],
        data: &LeagueData,
        i18n: &I18n,
        today: NaiveDate,
    ) -> Vec<Self> {
        players
            .iter()
            .map(|p| PlayerView::new(p, data, i18n, today))
            .collect()
    }
}

#[derive(Serialize)]
pub struct GoalView {
    pub id: u32,
    pub match_id: u32,
    pub player_id: u32,
    pub player_name: String,
    pub team_id: u32,
    pub team_name: String,
    pub minute: u8,
    pub goal_type: &'static str,
    pub goal_type_name: String,
    pub own_goal: bool,
}

impl GoalView {
    pub fn new(goal: &Goal, data: &LeagueData, i18n: &I18n) -> Self {
        GoalView {
            id: goal.id,
            match_id: goal.match_id,
            player_id: goal.player_id,
            player_name: data.player_name(goal.player_id).to_string(),
            team_id: goal.team_id,
            team_name: data.team_name(goal.team_id).to_string(),
            minute: goal.minute,
            goal_type: goal.goal_type.code(),
            goal_type_name: i18n.t(goal.goal_type.as_i18n_key()).to_string(),
            own_goal: goal.own_goal,
        }
    }
}

#[derive(Serialize)]
pub struct PlayerScorerView {
    pub player_id: u32,
    pub player_name: String,
    pub team_id: Option<u32>,
    pub team_name: String,
    pub goals: u32,
}

impl PlayerScorerView {
    pub fn new(scorer: &PlayerScorer, data: &LeagueData) -> Self {
        let team_id = data.player(scorer.player_id).map(|p| p.team_id);

        PlayerScorerView {
            player_id: scorer.player_id,
            player_name: data.player_name(scorer.player_id).to_string(),
            team_id,
            team_name: team_id.map(|id| data.team_name(id)).unwrap_or_default().to_string(),
            goals: scorer.goals,
        }
    }

    pub fn list(scorers: &[PlayerScorer], data: &LeagueData) -> Vec<Self> {
        scorers.iter().map(|s| PlayerScorerView::new(s, data)).collect()
    }
}

#[derive(Serialize)]
pub struct TeamScorerView {
    pub team_id: u32,
    pub team_name: String,
    pub goals: u32,
}

impl TeamScorerView {
    pub fn new(scorer: &TeamScorer, data: &LeagueData) -> Self {
        TeamScorerView {
            team_id: scorer.team_id,
            team_name: data.team_name(scorer.team_id).to_string(),
            goals: scorer.goals,
        }
    }
}

#[derive(Serialize)]
pub struct Created {
    pub id: u32,
}
