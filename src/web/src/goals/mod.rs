pub mod crud;
pub mod list;

use crate::AppData;
use axum::Router;

pub fn goal_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(crud::routes::routes())
}
