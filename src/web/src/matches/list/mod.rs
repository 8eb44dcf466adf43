pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::{MatchView, TeamView};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use league::{MatchFilter, MatchQueryParams, available_rounds};
use serde::Serialize;

#[derive(Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchView>,
    pub rounds: Vec<u16>,
    pub teams: Vec<TeamView>,
}

pub async fn match_list_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
    Query(params): Query<MatchQueryParams>,
) -> ApiResult<Json<MatchListResponse>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);
    let now = state.now();

    let filter = MatchFilter::from_params(&params);
    let matches = data.matches_filtered(&filter, now);

    Ok(Json(MatchListResponse {
        matches: MatchView::list(&matches, &data, &i18n, now),
        rounds: available_rounds(data.matches()),
        teams: data.teams_by_name().into_iter().map(TeamView::new).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing::{app, get_json};
    use serde_json::Value;

    fn ids(json: &Value) -> Vec<u64> {
        json["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn all_matches_newest_first() {
        let (_, json) = get_json(app(), "/pt/matches").await;

        assert_eq!(ids(&json), vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(json["rounds"], serde_json::json!([1, 2, 3, 4, 5]));
    }

    #[tokio::test]
    async fn filters_by_team_round_and_status() {
        let (_, json) = get_json(app(), "/pt/matches?time=4").await;
        assert_eq!(ids(&json), vec![10, 8, 6, 4, 2]);

        let (_, json) = get_json(app(), "/pt/matches?rodada=2").await;
        assert_eq!(ids(&json), vec![4, 3]);

        let (_, json) = get_json(app(), "/pt/matches?status=atrasado").await;
        assert_eq!(ids(&json), vec![6]);
        assert_eq!(json["matches"][0]["status"], "Atrasado");
        assert_eq!(json["matches"][0]["home_goals"], Value::Null);
    }

    #[tokio::test]
    async fn filters_by_date_range() {
        let (_, json) =
            get_json(app(), "/en/matches?data_inicio=2025-04-12&data_fim=2025-04-13").await;

        assert_eq!(ids(&json), vec![4, 3]);
    }

    #[tokio::test]
    async fn non_numeric_round_is_ignored() {
        let (_, json) = get_json(app(), "/en/matches?round=abc").await;

        assert_eq!(ids(&json).len(), 10);
    }
}
