use crate::AppData;
use crate::routes::ServerRoutes;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime};
use database::{DatabaseGenerator, DatabaseLoader};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Clock every router test runs at: after the seeded results, before the seeded fixtures.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Router over the bundled seed.
pub fn app() -> Router {
    let entity = DatabaseLoader::load().unwrap();
    let data = AppData::new(DatabaseGenerator::generate(&entity)).with_clock(Arc::new(fixed_now));

    ServerRoutes::create().with_state(data)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send_json(app, Method::GET, uri, None).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    let resp = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
