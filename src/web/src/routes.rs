use crate::AppData;
use crate::common::default_handler::default_handler;
use crate::dashboard::dashboard_routes;
use crate::goals::goal_routes;
use crate::i18n::detect_language;
use crate::matches::match_routes;
use crate::players::player_routes;
use crate::scorers::scorer_routes;
use crate::table::table_routes;
use crate::teams::team_routes;
use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;

async fn root_redirect(headers: HeaderMap) -> impl IntoResponse {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let lang = detect_language(accept_language);
    Redirect::temporary(&format!("/{}/dashboard", lang))
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .route("/", get(root_redirect))
            .merge(dashboard_routes())
            .merge(table_routes())
            .merge(team_routes())
            .merge(player_routes())
            .merge(match_routes())
            .merge(goal_routes())
            .merge(scorer_routes())
            .fallback(default_handler)
    }
}
