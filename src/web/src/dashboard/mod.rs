pub mod routes;

pub use routes::dashboard_routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::{MatchView, PlayerScorerView};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use league::LeagueSummary;
use serde::Serialize;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_teams: usize,
    pub total_players: usize,
    pub total_matches: usize,
    pub total_goals: usize,
    pub recent_matches: Vec<MatchView>,
    pub upcoming_matches: Vec<MatchView>,
    pub top_scorers: Vec<PlayerScorerView>,
}

pub async fn dashboard_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
) -> ApiResult<Json<DashboardResponse>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);
    let now = state.now();

    let summary = LeagueSummary::build(
        data.teams(),
        data.players(),
        data.matches(),
        data.goals(),
        now,
    );

    Ok(Json(DashboardResponse {
        total_teams: summary.total_teams,
        total_players: summary.total_players,
        total_matches: summary.total_matches,
        total_goals: summary.total_goals,
        recent_matches: MatchView::list(&summary.recent_matches, &data, &i18n, now),
        upcoming_matches: MatchView::list(&summary.upcoming_matches, &data, &i18n, now),
        top_scorers: PlayerScorerView::list(&summary.top_scorers, &data),
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::{app, get_json};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn dashboard_summarises_the_league() {
        let (status, json) = get_json(app(), "/pt/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_teams"], 4);
        assert_eq!(json["total_players"], 20);
        assert_eq!(json["total_matches"], 10);
        assert_eq!(json["total_goals"], 11);

        let recent = json["recent_matches"].as_array().unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0]["id"], 5);
        assert_eq!(recent[0]["status"], "Realizado");

        assert_eq!(json["top_scorers"][0]["player_name"], "Pedro");
        assert_eq!(json["top_scorers"][0]["goals"], 3);
    }
}
