pub mod routes;

pub use routes::scorer_routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::{PlayerScorerView, TeamScorerView};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use league::{compute_player_leaderboard, compute_team_leaderboard, lenient};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ScorersQuery {
    #[serde(alias = "limite")]
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct ScorersResponse {
    pub players: Vec<PlayerScorerView>,
    pub teams: Vec<TeamScorerView>,
}

/// Leaderboards, cut to `limit` rows when given.
pub async fn scorers_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
    Query(query): Query<ScorersQuery>,
) -> ApiResult<Json<ScorersResponse>> {
    let data = state.data.read().await;
    let limit = lenient::<usize>("limit", query.limit.as_deref()).unwrap_or(usize::MAX);

    let players = compute_player_leaderboard(data.goals());
    let teams = compute_team_leaderboard(data.goals());

    Ok(Json(ScorersResponse {
        players: players
            .iter()
            .take(limit)
            .map(|s| PlayerScorerView::new(s, &data))
            .collect(),
        teams: teams
            .iter()
            .take(limit)
            .map(|s| TeamScorerView::new(s, &data))
            .collect(),
    }))
}
