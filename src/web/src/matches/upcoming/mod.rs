pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::MatchView;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use league::{RoundQueryParams, available_rounds, upcoming_fixtures};
use serde::Serialize;

#[derive(Serialize)]
pub struct UpcomingResponse {
    pub round: Option<u16>,
    /// Rounds that still have fixtures ahead.
    pub rounds: Vec<u16>,
    pub matches: Vec<MatchView>,
}

pub async fn match_upcoming_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
    Query(params): Query<RoundQueryParams>,
) -> ApiResult<Json<UpcomingResponse>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);
    let now = state.now();

    let round = params.round();
    let matches = upcoming_fixtures(data.matches(), round, now);
    let rounds = available_rounds(upcoming_fixtures(data.matches(), None, now));

    Ok(Json(UpcomingResponse {
        round,
        rounds,
        matches: MatchView::list(&matches, &data, &i18n, now),
    }))
}
