pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::{PlayerView, TeamView};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use league::{PlayerFilter, PlayerPosition, PlayerQueryParams};
use serde::Serialize;

#[derive(Serialize)]
pub struct PositionOption {
    pub code: &'static str,
    pub name: String,
}

#[derive(Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerView>,
    pub teams: Vec<TeamView>,
    pub positions: Vec<PositionOption>,
}

pub async fn player_list_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
    Query(params): Query<PlayerQueryParams>,
) -> ApiResult<Json<PlayerListResponse>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    let filter = PlayerFilter::from_params(&params);
    let players = data.players_filtered(&filter);

    Ok(Json(PlayerListResponse {
        players: PlayerView::list(&players, &data, &i18n, state.now().date()),
        teams: data.teams_by_name().into_iter().map(TeamView::new).collect(),
        positions: PlayerPosition::ALL
            .iter()
            .map(|p| PositionOption {
                code: p.code(),
                name: i18n.t(p.as_i18n_key()).to_string(),
            })
            .collect(),
    }))
}
