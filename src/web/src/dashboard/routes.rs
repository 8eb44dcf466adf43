use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn dashboard_routes() -> Router<AppData> {
    Router::new().route("/{lang}/dashboard", get(super::dashboard_action))
}
