use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn scorer_routes() -> Router<AppData> {
    Router::new().route("/{lang}/scorers", get(super::scorers_action))
}
