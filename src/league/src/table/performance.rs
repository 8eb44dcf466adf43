use crate::entities::Match;
use crate::table::standings::{POINTS_FOR_WIN, TeamStanding};
use serde::Serialize;

/// Standing of one team plus its efficiency (aproveitamento).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPerformance {
    pub standing: TeamStanding,
    pub efficiency: f64,
}

impl TeamPerformance {
    pub fn from_standing(standing: TeamStanding) -> Self {
        let efficiency = efficiency_percentage(standing.points, standing.played);

        TeamPerformance {
            standing,
            efficiency,
        }
    }
}

pub fn team_performance(team_id: u32, matches: &[Match]) -> TeamPerformance {
    TeamPerformance::from_standing(TeamStanding::aggregate(team_id, matches))
}

/// Points earned as a percentage of points available, one decimal place with
/// halves rounded to even. Zero when nothing has been played.
pub fn efficiency_percentage(points: u16, played: u16) -> f64 {
    if played == 0 {
        return 0.0;
    }

    let available = played as f64 * POINTS_FOR_WIN as f64;
    let ratio = points as f64 / available * 100.0;

    (ratio * 10.0).round_ties_even() / 10.0
}
