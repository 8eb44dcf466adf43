pub mod routes;

use crate::common::{ApiPath, EntityRequest};
use crate::views::{MatchView, PlayerView, StandingView, TeamView};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use league::{compute_standings, next_fixtures, recent_results, team_performance};
use serde::Serialize;

const PROFILE_MATCHES: usize = 5;

#[derive(Serialize)]
pub struct TeamGetResponse {
    pub team: TeamView,
    pub performance: StandingView,
    pub recent_results: Vec<MatchView>,
    pub next_fixtures: Vec<MatchView>,
    pub squad: Vec<PlayerView>,
    pub active_players: usize,
}

pub async fn team_get_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
) -> ApiResult<Json<TeamGetResponse>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);
    let now = state.now();

    let team = data
        .team(route_params.id)
        .ok_or_else(|| ApiError::NotFound(format!("Team with ID {} not found", route_params.id)))?;

    let performance = team_performance(team.id, data.matches());
    let position = compute_standings(data.teams().iter().map(|t| t.id), data.matches())
        .iter()
        .position(|s| s.team_id == team.id)
        .map_or(0, |idx| idx + 1);

    let recent = recent_results(data.matches(), Some(team.id), PROFILE_MATCHES);
    let upcoming = next_fixtures(data.matches(), Some(team.id), now, PROFILE_MATCHES);

    Ok(Json(TeamGetResponse {
        team: TeamView::new(team),
        performance: StandingView::new(position, &performance, &data),
        recent_results: MatchView::list(&recent, &data, &i18n, now),
        next_fixtures: MatchView::list(&upcoming, &data, &i18n, now),
        squad: PlayerView::list(&data.squad(team.id), &data, &i18n, now.date()),
        active_players: data.active_players(team.id).len(),
    }))
}
