pub mod routes;

use crate::common::{ApiJson, ApiPath, EntityRequest, LangRequest};
use crate::views::{Created, MatchView};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use database::{MatchDraft, ResultDraft};

pub async fn match_create_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
    ApiJson(draft): ApiJson<MatchDraft>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let mut data = state.data.write().await;

    let id = data.create_match(draft)?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn match_update_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
    ApiJson(draft): ApiJson<MatchDraft>,
) -> ApiResult<Json<MatchView>> {
    let mut data = state.data.write().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    data.update_match(route_params.id, draft)?;

    let game = data
        .get_match(route_params.id)
        .ok_or_else(|| ApiError::InternalError(format!("Match {} vanished", route_params.id)))?;

    Ok(Json(MatchView::new(game, &data, &i18n, state.now())))
}

/// Stores the final score and marks the match completed.
pub async fn match_result_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
    ApiJson(result): ApiJson<ResultDraft>,
) -> ApiResult<Json<MatchView>> {
    let mut data = state.data.write().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    let game = data.record_result(route_params.id, result)?.clone();

    Ok(Json(MatchView::new(&game, &data, &i18n, state.now())))
}

/// Also removes the match's goals.
pub async fn match_delete_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
) -> ApiResult<StatusCode> {
    let mut data = state.data.write().await;

    data.delete_match(route_params.id)?;

    Ok(StatusCode::NO_CONTENT)
}
