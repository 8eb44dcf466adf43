use crate::AppData;
use axum::Router;
use axum::routing::{post, put};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/{lang}/players", post(super::player_create_action))
        .route(
            "/{lang}/players/{id}",
            put(super::player_update_action).delete(super::player_delete_action),
        )
}
