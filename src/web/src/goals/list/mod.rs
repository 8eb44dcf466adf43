pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::GoalView;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use league::{GoalFilter, GoalQueryParams};

/// Goals newest first.
pub async fn goal_list_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
    Query(params): Query<GoalQueryParams>,
) -> ApiResult<Json<Vec<GoalView>>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    let filter = GoalFilter::from_params(&params);

    let goals = data
        .goals_filtered(&filter)
        .into_iter()
        .map(|g| GoalView::new(g, &data, &i18n))
        .collect();

    Ok(Json(goals))
}
