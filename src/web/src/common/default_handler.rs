use crate::ApiError;
use crate::i18n::{DEFAULT_LANGUAGE, I18nManager};
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Redirects lang-less routes to the default language, 404 otherwise.
pub async fn default_handler(uri: Uri) -> Response {
    let path_str = uri.path().trim_start_matches('/');

    let first_segment = path_str.split('/').next().unwrap_or("");
    let has_lang_prefix = I18nManager::is_supported_language(first_segment);

    if !has_lang_prefix && !path_str.is_empty() {
        let redirect_url = match uri.query() {
            Some(query) => format!("/{}/{}?{}", DEFAULT_LANGUAGE, path_str, query),
            None => format!("/{}/{}", DEFAULT_LANGUAGE, path_str),
        };
        return Redirect::permanent(&redirect_url).into_response();
    }

    ApiError::NotFound(format!("no route for {}", uri.path())).into_response()
}
