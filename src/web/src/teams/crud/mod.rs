pub mod routes;

use crate::common::{ApiJson, ApiPath, EntityRequest, LangRequest};
use crate::views::{Created, TeamView};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use database::TeamDraft;

pub async fn team_create_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
    ApiJson(draft): ApiJson<TeamDraft>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let mut data = state.data.write().await;

    let id = data.create_team(draft)?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn team_update_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
    ApiJson(draft): ApiJson<TeamDraft>,
) -> ApiResult<Json<TeamView>> {
    let mut data = state.data.write().await;

    data.update_team(route_params.id, draft)?;

    let team = data
        .team(route_params.id)
        .ok_or_else(|| ApiError::InternalError(format!("Team {} vanished", route_params.id)))?;

    Ok(Json(TeamView::new(team)))
}

/// Also removes the team's players, matches and goals.
pub async fn team_delete_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
) -> ApiResult<StatusCode> {
    let mut data = state.data.write().await;

    data.delete_team(route_params.id)?;

    Ok(StatusCode::NO_CONTENT)
}
