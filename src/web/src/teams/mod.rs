pub mod crud;
pub mod get;
pub mod list;

use crate::AppData;
use axum::Router;

pub fn team_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(crud::routes::routes())
}
