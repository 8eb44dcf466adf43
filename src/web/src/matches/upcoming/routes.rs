use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/{lang}/matches/upcoming", get(super::match_upcoming_action))
}
