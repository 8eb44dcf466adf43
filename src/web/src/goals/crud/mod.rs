pub mod routes;

use crate::common::{ApiJson, ApiPath, EntityRequest, LangRequest};
use crate::views::{Created, GoalView};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use database::GoalDraft;

pub async fn goal_create_action(
    State(state): State<AppData>,
    ApiPath(_route_params): ApiPath<LangRequest>,
    ApiJson(draft): ApiJson<GoalDraft>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let mut data = state.data.write().await;

    let id = data.create_goal(draft)?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn goal_update_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
    ApiJson(draft): ApiJson<GoalDraft>,
) -> ApiResult<Json<GoalView>> {
    let mut data = state.data.write().await;
    let i18n = state.i18n.for_lang(&route_params.lang);

    data.update_goal(route_params.id, draft)?;

    let goal = data
        .goal(route_params.id)
        .ok_or_else(|| ApiError::InternalError(format!("Goal {} vanished", route_params.id)))?;

    Ok(Json(GoalView::new(goal, &data, &i18n)))
}

pub async fn goal_delete_action(
    State(state): State<AppData>,
    ApiPath(route_params): ApiPath<EntityRequest>,
) -> ApiResult<StatusCode> {
    let mut data = state.data.write().await;

    data.delete_goal(route_params.id)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::testing::{app, get_json, send_json};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn own_goal_does_not_reach_the_leaderboard() {
        let app = app();

        let (status, json) = send_json(
            app.clone(),
            Method::POST,
            "/pt/goals",
            Some(json!({
                "match_id": 5,
                "player_id": 2,
                "team_id": 3,
                "minute": 90,
                "goal_type": "CONTRA"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json["id"].as_u64().unwrap();
        assert_eq!(id, 13);

        let (_, goals) = get_json(app.clone(), "/pt/goals?jogador=2").await;
        assert_eq!(goals[0]["own_goal"], true);

        let (_, scorers) = get_json(app, "/pt/scorers").await;
        let players = scorers["players"].as_array().unwrap();
        assert!(players.iter().all(|p| p["player_id"] != 2));
    }

    #[tokio::test]
    async fn malformed_goal_body_is_a_json_bad_request() {
        let (status, json) = send_json(
            app(),
            Method::POST,
            "/pt/goals",
            Some(json!({ "match_id": 5, "player_id": 2, "team_id": 1, "minute": 300 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn goal_update_and_delete() {
        let app = app();

        let (status, json) = send_json(
            app.clone(),
            Method::PUT,
            "/en/goals/5",
            Some(json!({
                "match_id": 2,
                "player_id": 20,
                "team_id": 4,
                "minute": 88,
                "goal_type": "FALTA"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["minute"], 88);
        assert_eq!(json["goal_type"], "FALTA");
        assert_eq!(json["goal_type_name"], "Free kick");

        let (status, _) = send_json(app.clone(), Method::DELETE, "/en/goals/5", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send_json(app, Method::DELETE, "/en/goals/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn goal_needs_existing_references() {
        let (status, json) = send_json(
            app(),
            Method::POST,
            "/en/goals",
            Some(json!({ "match_id": 1, "player_id": 500, "team_id": 1, "minute": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "player with id 500 not found");
    }
}
