pub mod routes;

use crate::common::{ApiJson, ApiPath, EntityRequest, LangRequest};
use crate::views::{Created, PlayerView};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use database::PlayerDraft;

pub async fn player_create_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
    ApiJson(draft): ApiJson<PlayerDraft>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let mut data = state.data.write().await;

    let id = data.create_player(draft)?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn player_update_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
    ApiJson(draft): ApiJson<PlayerDraft>,
) -> ApiResult<Json<PlayerView>> {
    let mut data = state.data.write().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    data.update_player(route_params.id, draft)?;

    let player = data
        .player(route_params.id)
        .ok_or_else(|| ApiError::InternalError(format!("Player {} vanished", route_params.id)))?;

    Ok(Json(PlayerView::new(player, &data, &i18n, state.now().date())))
}

/// Also removes the player's goals.
pub async fn player_delete_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
) -> ApiResult<StatusCode> {
    let mut data = state.data.write().await;

    data.delete_player(route_params.id)?;

    Ok(StatusCode::NO_CONTENT)
}
