pub mod routes;

use crate::common::{ApiPath, LangRequest};
use crate::views::MatchView;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use itertools::Itertools;
use league::completed_results;
use serde::Serialize;

#[derive(Serialize)]
pub struct RoundResults {
    pub round: u16,
    pub matches: Vec<MatchView>,
}

/// Completed matches grouped by round.
pub async fn match_results_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<LangRequest>,
) -> ApiResult<Json<Vec<RoundResults>>> {
    let data = state.data.read().await;
    let i18n = state.i18n.for_lang(&route_params.lang);
    let now = state.now();

    let rounds = completed_results(data.matches())
        .into_iter()
        .chunk_by(|m| m.round)
        .into_iter()
        .map(|(round, matches)| RoundResults {
            round,
            matches: matches.map(|m| MatchView::new(m, &data, &i18n, now)).collect(),
        })
        .collect();

    Ok(Json(rounds))
}

#[cfg(test)]
mod tests {
    use crate::testing::{app, get_json};

    #[tokio::test]
    async fn results_are_grouped_by_round() {
        let (_, json) = get_json(app(), "/pt/matches/results").await;

        let rounds = json.as_array().unwrap();
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0]["round"], 1);
        assert_eq!(rounds[0]["matches"][0]["id"], 2);
        assert_eq!(rounds[0]["matches"][1]["id"], 1);
        assert_eq!(rounds[2]["matches"].as_array().unwrap().len(), 1);
        assert_eq!(rounds[2]["matches"][0]["home_goals"], 1);
    }
}
