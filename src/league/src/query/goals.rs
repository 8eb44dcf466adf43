use crate::entities::Goal;
use crate::query::params::lenient;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalQueryParams {
    #[serde(alias = "time")]
    pub team: Option<String>,
    #[serde(alias = "jogador")]
    pub player: Option<String>,
    #[serde(alias = "jogo", rename = "match")]
    pub match_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFilter {
    pub team_id: Option<u32>,
    pub player_id: Option<u32>,
    pub match_id: Option<u32>,
}

impl GoalFilter {
    pub fn from_params(params: &GoalQueryParams) -> Self {
        GoalFilter {
            team_id: lenient("team", params.team.as_deref()),
            player_id: lenient("player", params.player.as_deref()),
            match_id: lenient("match", params.match_id.as_deref()),
        }
    }

    pub fn accepts(&self, goal: &Goal) -> bool {
        self.team_id.is_none_or(|id| goal.team_id == id)
            && self.player_id.is_none_or(|id| goal.player_id == id)
            && self.match_id.is_none_or(|id| goal.match_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GoalType;
    use chrono::NaiveDate;

    fn goal(match_id: u32, player_id: u32, team_id: u32) -> Goal {
        Goal {
            id: 1,
            match_id,
            player_id,
            team_id,
            minute: 45,
            goal_type: GoalType::Penalty,
            own_goal: false,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn combined_filters() {
        let filter = GoalFilter::from_params(&GoalQueryParams {
            team: Some("1".to_string()),
            player: Some("todos".to_string()),
            match_id: Some("7".to_string()),
        });

        assert_eq!(filter.player_id, None);
        assert!(filter.accepts(&goal(7, 99, 1)));
        assert!(!filter.accepts(&goal(8, 99, 1)));
        assert!(!filter.accepts(&goal(7, 99, 2)));
    }

    #[test]
    fn empty_filter_accepts_all() {
        assert!(GoalFilter::default().accepts(&goal(1, 2, 3)));
    }
}
