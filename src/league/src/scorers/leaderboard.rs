use crate::entities::Goal;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScorer {
    pub player_id: u32,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamScorer {
    pub team_id: u32,
    pub goals: u32,
}

/// Goals per scoring player, own goals excluded, most goals first.
pub fn compute_player_leaderboard(goals: &[Goal]) -> Vec<PlayerScorer> {
    tally(goals, |goal| goal.player_id)
        .into_iter()
        .map(|(player_id, goals)| PlayerScorer { player_id, goals })
        .collect()
}

/// Goals per credited team, own goals excluded, most goals first.
pub fn compute_team_leaderboard(goals: &[Goal]) -> Vec<TeamScorer> {
    tally(goals, |goal| goal.team_id)
        .into_iter()
        .map(|(team_id, goals)| TeamScorer { team_id, goals })
        .collect()
}

/// Counts goals per key. Groups are kept in order of first appearance so
/// that the stable sort leaves equal counts in input order.
fn tally<K, F>(goals: &[Goal], key: F) -> Vec<(K, u32)>
where
    K: Copy + Eq + Hash,
    F: Fn(&Goal) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, u32)> = Vec::new();

    for goal in goals.iter().filter(|g| !g.is_own_goal()) {
        let k = key(goal);
        match positions.get(&k) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GoalType;
    use chrono::NaiveDate;

    fn goal(id: u32, match_id: u32, player_id: u32, team_id: u32, own_goal: bool) -> Goal {
        Goal {
            id,
            match_id,
            player_id,
            team_id,
            minute: 10,
            goal_type: if own_goal { GoalType::OwnGoal } else { GoalType::Normal },
            own_goal,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn own_goal_is_never_counted_for_the_player() {
        // the only goal of match 7 is an own goal
        let goals = vec![goal(1, 7, 100, 1, true), goal(2, 8, 200, 2, false)];

        let board = compute_player_leaderboard(&goals);

        assert_eq!(board, vec![PlayerScorer { player_id: 200, goals: 1 }]);
    }

    #[test]
    fn players_are_ordered_by_goal_count() {
        let goals = vec![
            goal(1, 1, 100, 1, false),
            goal(2, 1, 200, 1, false),
            goal(3, 2, 200, 1, false),
            goal(4, 3, 300, 2, false),
            goal(5, 3, 200, 1, false),
            goal(6, 4, 300, 2, false),
        ];

        let board = compute_player_leaderboard(&goals);

        assert_eq!(
            board,
            vec![
                PlayerScorer { player_id: 200, goals: 3 },
                PlayerScorer { player_id: 300, goals: 2 },
                PlayerScorer { player_id: 100, goals: 1 },
            ]
        );
    }

    #[test]
    fn equal_counts_keep_first_appearance_order() {
        let goals = vec![
            goal(1, 1, 300, 3, false),
            goal(2, 1, 100, 1, false),
            goal(3, 2, 200, 2, false),
        ];

        let order: Vec<u32> = compute_player_leaderboard(&goals)
            .iter()
            .map(|s| s.player_id)
            .collect();

        assert_eq!(order, vec![300, 100, 200]);
    }

    #[test]
    fn team_leaderboard_groups_by_credited_team() {
        let goals = vec![
            goal(1, 1, 100, 1, false),
            goal(2, 1, 101, 1, false),
            goal(3, 1, 200, 2, false),
            goal(4, 2, 201, 2, true),
        ];

        let board = compute_team_leaderboard(&goals);

        assert_eq!(
            board,
            vec![
                TeamScorer { team_id: 1, goals: 2 },
                TeamScorer { team_id: 2, goals: 1 },
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_board() {
        assert!(compute_player_leaderboard(&[]).is_empty());
        assert!(compute_team_leaderboard(&[]).is_empty());
    }
}
