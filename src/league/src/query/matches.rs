use crate::entities::Match;
use crate::query::params::{lenient, lenient_date};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    /// realizado
    Completed,
    /// agendado
    Scheduled,
    /// atrasado
    Overdue,
}

impl MatchStatus {
    pub fn of(m: &Match, now: NaiveDateTime) -> Self {
        if m.completed {
            MatchStatus::Completed
        } else if m.is_overdue(now) {
            MatchStatus::Overdue
        } else {
            MatchStatus::Scheduled
        }
    }

    pub fn as_i18n_key(&self) -> &'static str {
        match self {
            MatchStatus::Completed => "status_completed",
            MatchStatus::Scheduled => "status_scheduled",
            MatchStatus::Overdue => "status_overdue",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "realizado" | "completed" => Ok(MatchStatus::Completed),
            "agendado" | "scheduled" => Ok(MatchStatus::Scheduled),
            "atrasado" | "overdue" => Ok(MatchStatus::Overdue),
            other => Err(format!("unknown match status: {}", other)),
        }
    }
}

/// Raw match listing parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQueryParams {
    #[serde(alias = "time")]
    pub team: Option<String>,
    #[serde(alias = "rodada")]
    pub round: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "data_inicio")]
    pub date_from: Option<String>,
    #[serde(alias = "data_fim")]
    pub date_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub team_id: Option<u32>,
    pub round: Option<u16>,
    pub status: Option<MatchStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl MatchFilter {
    pub fn from_params(params: &MatchQueryParams) -> Self {
        MatchFilter {
            team_id: lenient("team", params.team.as_deref()),
            round: lenient("round", params.round.as_deref()),
            status: lenient("status", params.status.as_deref()),
            date_from: lenient_date("date_from", params.date_from.as_deref()),
            date_to: lenient_date("date_to", params.date_to.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == MatchFilter::default()
    }

    pub fn accepts(&self, m: &Match, now: NaiveDateTime) -> bool {
        if let Some(team_id) = self.team_id {
            if !m.involves(team_id) {
                return false;
            }
        }

        if let Some(round) = self.round {
            if m.round != round {
                return false;
            }
        }

        if let Some(status) = self.status {
            if MatchStatus::of(m, now) != status {
                return false;
            }
        }

        let day = m.date.date();

        if self.date_from.is_some_and(|from| day < from) {
            return false;
        }

        if self.date_to.is_some_and(|to| day > to) {
            return false;
        }

        true
    }

    /// Matching rows, newest first.
    pub fn apply<'m>(&self, matches: &'m [Match], now: NaiveDateTime) -> Vec<&'m Match> {
        let mut result: Vec<&Match> = matches.iter().filter(|m| self.accepts(m, now)).collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }
}

/// Round selection for the upcoming fixtures view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundQueryParams {
    #[serde(alias = "rodada")]
    pub round: Option<String>,
}

impl RoundQueryParams {
    pub fn round(&self) -> Option<u16> {
        lenient("round", self.round.as_deref())
    }
}
