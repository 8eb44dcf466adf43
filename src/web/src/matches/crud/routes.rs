use crate::AppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/{lang}/matches", post(super::match_create_action))
        .route(
            "/{lang}/matches/{id}",
            put(super::match_update_action).delete(super::match_delete_action),
        )
        .route("/{lang}/matches/{id}/result", post(super::match_result_action))
}
