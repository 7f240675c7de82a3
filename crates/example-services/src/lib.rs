//! example-services - In-memory downstream services
//!
//! Three small services speaking the downstream contract the gateway
//! consumes (`GET /{id}` returning a JSON record or a 4xx): a bicycle
//! service, a boat service, and a brand service. They stand in for the
//! real downstream collaborators in tests and demos.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

type Store = Arc<HashMap<&'static str, Value>>;

/// Bicycle service: records with `id` and `color`.
pub fn bicycle_router() -> Router {
    store_router(HashMap::from([
        ("7", json!({"id": "7", "color": "red"})),
        ("8", json!({"id": "8", "color": "green"})),
    ]))
}

/// Boat service: records with `id`, `color` and a numeric `brand` key.
pub fn boat_router() -> Router {
    store_router(HashMap::from([
        ("3", json!({"id": "3", "color": "blue", "brand": "42"})),
        ("4", json!({"id": "4", "color": "yellow", "brand": "43"})),
    ]))
}

/// Brand service: records with `name`, keyed by numeric id.
///
/// Non-numeric ids are rejected with 400, which gives callers a way to
/// exercise the gateway's bad-request translation end to end.
pub fn brand_router() -> Router {
    let store: Store = Arc::new(HashMap::from([
        ("7", json!({"name": "Acme"})),
        ("8", json!({"name": "Gazelle"})),
        ("42", json!({"name": "SuperMarine"})),
        ("43", json!({"name": "Riva"})),
    ]));

    Router::new()
        .route("/{id}", get(read_brand))
        .with_state(store)
}

fn store_router(records: HashMap<&'static str, Value>) -> Router {
    let store: Store = Arc::new(records);
    Router::new()
        .route("/{id}", get(read_record))
        .with_state(store)
}

async fn read_record(State(store): State<Store>, Path(id): Path<String>) -> Response {
    match store.get(id.as_str()) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

async fn read_brand(State(store): State<Store>, Path(id): Path<String>) -> Response {
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "bad_request",
                "message": "brand ids are numeric",
            })),
        )
            .into_response();
    }

    match store.get(id.as_str()) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": "no record under that id",
        })),
    )
        .into_response()
}
