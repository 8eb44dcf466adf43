pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::{StandingView, TeamView};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use league::{TeamPerformance, compute_standings};
use serde::Serialize;

#[derive(Serialize)]
pub struct TeamListItem {
    #[serde(flatten)]
    pub team: TeamView,
    pub players: usize,
    /// Every goal credited to the team, own goals included.
    pub goals: usize,
    pub standing: Option<StandingView>,
}

/// Teams alphabetically, each with its table row.
pub async fn team_list_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
) -> ApiResult<Json<Vec<TeamListItem>>> {
    let data = state.data.read().await;

    let standings = compute_standings(data.teams().iter().map(|t| t.id), data.matches());

    let items = data
        .teams_by_name()
        .into_iter()
        .map(|team| TeamListItem {
            team: TeamView::new(team),
            players: data.squad(team.id).len(),
            goals: data.goals().iter().filter(|g| g.team_id == team.id).count(),
            standing: standings
                .iter()
                .position(|s| s.team_id == team.id)
                .map(|idx| {
                    let performance = TeamPerformance::from_standing(standings[idx].clone());
                    StandingView::new(idx + 1, &performance, &data)
                }),
        })
        .collect();

    Ok(Json(items))
}
