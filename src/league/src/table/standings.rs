use crate::entities::Match;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

pub const POINTS_FOR_WIN: u16 = 3;
pub const POINTS_FOR_DRAW: u16 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_score(scored: u8, conceded: u8) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u16 {
        match self {
            MatchOutcome::Win => POINTS_FOR_WIN,
            MatchOutcome::Draw => POINTS_FOR_DRAW,
            MatchOutcome::Loss => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub team_id: u32,
    pub points: u16,
    pub played: u16,
    pub win: u16,
    pub draw: u16,
    pub lost: u16,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl TeamStanding {
    pub fn new(team_id: u32) -> Self {
        TeamStanding {
            team_id,
            points: 0,
            played: 0,
            win: 0,
            draw: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }

    /// Aggregates every completed match `team_id` took part in.
    pub fn aggregate(team_id: u32, matches: &[Match]) -> Self {
        let mut standing = TeamStanding::new(team_id);

        for m in matches.iter().filter(|m| m.completed) {
            if let Some((scored, conceded)) = m.score_for(team_id) {
                standing.record(scored, conceded);
            }
        }

        standing
    }

    pub fn record(&mut self, scored: u8, conceded: u8) -> MatchOutcome {
        let outcome = MatchOutcome::from_score(scored, conceded);

        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        self.points += outcome.points();

        match outcome {
            MatchOutcome::Win => self.win += 1,
            MatchOutcome::Draw => self.draw += 1,
            MatchOutcome::Loss => self.lost += 1,
        }

        outcome
    }

    /// Ranking precedence, compared descending.
    fn ranking_key(&self) -> (u16, u16, i32, u32) {
        (self.points, self.win, self.goal_difference, self.goals_for)
    }

    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other.ranking_key().cmp(&self.ranking_key())
    }
}

/// Ranked standings for `teams` over `matches`.
///
/// Pending matches are ignored. Teams tied on points, wins, goal difference
/// and goals scored keep the order they were given in.
pub fn compute_standings<I>(teams: I, matches: &[Match]) -> Vec<TeamStanding>
where
    I: IntoIterator<Item = u32>,
{
    let mut standings: Vec<TeamStanding> = teams
        .into_iter()
        .map(|team_id| TeamStanding::aggregate(team_id, matches))
        .collect();

    // sort_by is stable
    standings.sort_by(|a, b| a.cmp_rank(b));

    debug!(
        "standings computed: {} teams over {} matches",
        standings.len(),
        matches.len()
    );

    standings
}
