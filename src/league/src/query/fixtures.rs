use crate::entities::Match;
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::cmp::Reverse;

/// Completed matches grouped by round, latest first within a round.
pub fn completed_results(matches: &[Match]) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| m.completed)
        .sorted_by_key(|m| (m.round, Reverse(m.date)))
        .collect()
}

/// Pending matches from `now` on. A selected round is listed by kick-off,
/// otherwise everything is listed by round then kick-off.
pub fn upcoming_fixtures(matches: &[Match], round: Option<u16>, now: NaiveDateTime) -> Vec<&Match> {
    let upcoming = matches.iter().filter(|m| m.is_upcoming(now));

    match round {
        Some(round) => upcoming
            .filter(|m| m.round == round)
            .sorted_by_key(|m| m.date)
            .collect(),
        None => upcoming.sorted_by_key(|m| (m.round, m.date)).collect(),
    }
}

pub fn available_rounds<'m, I>(matches: I) -> Vec<u16>
where
    I: IntoIterator<Item = &'m Match>,
{
    matches.into_iter().map(|m| m.round).sorted().dedup().collect()
}

/// Latest completed matches, optionally only those of `team_id`.
pub fn recent_results(matches: &[Match], team_id: Option<u32>, limit: usize) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| m.completed && team_id.is_none_or(|id| m.involves(id)))
        .sorted_by_key(|m| Reverse(m.date))
        .take(limit)
        .collect()
}

/// Nearest pending matches from `now` on, optionally only those of `team_id`.
pub fn next_fixtures(
    matches: &[Match],
    team_id: Option<u32>,
    now: NaiveDateTime,
    limit: usize,
) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| m.is_upcoming(now) && team_id.is_none_or(|id| m.involves(id)))
        .sorted_by_key(|m| m.date)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn game(
        id: u32,
        home: u32,
        away: u32,
        round: u16,
        date: NaiveDateTime,
        completed: bool,
    ) -> Match {
        Match {
            id,
            home_team_id: home,
            away_team_id: away,
            home_goals: 1,
            away_goals: 0,
            date,
            venue: None,
            round,
            completed,
        }
    }

    fn ids(matches: &[&Match]) -> Vec<u32> {
        matches.iter().map(|m| m.id).collect()
    }

    fn season() -> Vec<Match> {
        vec![
            game(1, 1, 2, 1, at(2, 16), true),
            game(2, 3, 4, 1, at(2, 18), true),
            game(3, 1, 3, 2, at(9, 16), true),
            game(4, 2, 4, 2, at(9, 11), false),
            game(5, 4, 1, 3, at(23, 16), false),
            game(6, 2, 3, 3, at(23, 11), false),
            game(7, 1, 2, 4, at(30, 16), false),
        ]
    }

    #[test]
    fn results_by_round_latest_first() {
        let matches = season();

        assert_eq!(ids(&completed_results(&matches)), vec![2, 1, 3]);
    }

    #[test]
    fn upcoming_without_round_orders_by_round_then_date() {
        let matches = season();

        assert_eq!(ids(&upcoming_fixtures(&matches, None, at(10, 0))), vec![6, 5, 7]);
    }

    #[test]
    fn upcoming_with_round_only_lists_that_round() {
        let matches = season();

        assert_eq!(ids(&upcoming_fixtures(&matches, Some(3), at(10, 0))), vec![6, 5]);
        assert!(upcoming_fixtures(&matches, Some(2), at(10, 0)).is_empty());
    }

    #[test]
    fn rounds_are_distinct_and_sorted() {
        let matches = season();

        assert_eq!(available_rounds(matches.iter().rev()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn team_recent_and_next() {
        let matches = season();

        assert_eq!(ids(&recent_results(&matches, Some(1), 5)), vec![3, 1]);
        assert_eq!(ids(&next_fixtures(&matches, Some(1), at(10, 0), 5)), vec![5, 7]);
        assert_eq!(ids(&next_fixtures(&matches, None, at(10, 0), 2)), vec![6, 5]);
    }
}
