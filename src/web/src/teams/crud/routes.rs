use crate::AppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/{lang}/teams", post(super::team_create_action))
        .route(
            "/{lang}/teams/{id}",
            put(super::team_update_action).delete(super::team_delete_action),
        )
}
