use crate::AppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/{lang}/goals", post(super::goal_create_action))
        .route(
            "/{lang}/goals/{id}",
            put(super::goal_update_action).delete(super::goal_delete_action),
        )
}
