pub mod crud;
pub mod list;
pub mod results;
pub mod upcoming;

use crate::AppData;
use axum::Router;

pub fn match_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(results::routes::routes())
        .merge(upcoming::routes::routes())
        .merge(crud::routes::routes())
}
