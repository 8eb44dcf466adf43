pub mod routes;

pub use routes::table_routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::StandingView;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use league::compute_standings;

pub async fn table_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
) -> ApiResult<Json<Vec<StandingView>>> {
    let data = state.data.read().await;

    let standings = compute_standings(data.teams().iter().map(|t| t.id), data.matches());

    Ok(Json(StandingView::table(&standings, &data)))
}
