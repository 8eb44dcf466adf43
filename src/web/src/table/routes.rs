use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn table_routes() -> Router<AppData> {
    Router::new().route("/{lang}/table", get(super::table_action))
}
