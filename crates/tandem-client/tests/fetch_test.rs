//! Integration tests for the downstream client against in-process stubs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use tandem_client::testing::TestServer;
use tandem_client::DownstreamClient;
use tandem_core::config::DownstreamConfig;
use tandem_core::error::FetchError;

#[derive(Debug, Deserialize, PartialEq)]
struct Widget {
    id: String,
    color: String,
}

fn config_for(server: &TestServer) -> DownstreamConfig {
    DownstreamConfig::new(server.base_url())
}

#[tokio::test]
async fn fetches_and_decodes_record() {
    let router = Router::new().route(
        "/{id}",
        get(|Path(id): Path<String>| async move { Json(json!({"id": id, "color": "red"})) }),
    );
    let server = TestServer::start(router).await.unwrap();

    let client = DownstreamClient::new(&config_for(&server)).unwrap();
    let widget: Widget = client.fetch("7").await.unwrap();

    assert_eq!(
        widget,
        Widget {
            id: "7".into(),
            color: "red".into()
        }
    );
}

#[tokio::test]
async fn ids_with_path_characters_round_trip_distinctly() {
    let router = Router::new().route(
        "/{id}",
        get(|Path(id): Path<String>| async move { Json(json!({"id": id, "color": "red"})) }),
    );
    let server = TestServer::start(router).await.unwrap();
    let client = DownstreamClient::new(&config_for(&server)).unwrap();

    // A literal slash stays one path segment
    let widget: Widget = client.fetch("a/b").await.unwrap();
    assert_eq!(widget.id, "a/b");

    // A literal percent is not misread as an escape, so this id does not
    // collide with "a/b"
    let widget: Widget = client.fetch("a%2Fb").await.unwrap();
    assert_eq!(widget.id, "a%2Fb");
}

#[tokio::test]
async fn status_failure_carries_exact_code() {
    let router = Router::new().route(
        "/{id}",
        get(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "bad_request"}))) }),
    );
    let server = TestServer::start(router).await.unwrap();

    let client = DownstreamClient::new(&config_for(&server)).unwrap();
    let err = client.fetch::<Widget>("7").await.unwrap_err();

    assert_eq!(err, FetchError::Status(400));
}

#[tokio::test]
async fn status_failures_are_never_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/{id}",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})))
            }
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let mut config = config_for(&server);
    config.retries = 3;
    let client = DownstreamClient::new(&config).unwrap();

    let err = client.fetch::<Widget>("7").await.unwrap_err();
    assert_eq!(err, FetchError::Status(500));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn connectivity_failures_are_retried() {
    // First request exceeds the client timeout, the retry answers promptly.
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/{id}",
        get(move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
                Json(json!({"id": "1", "color": "red"}))
            }
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let mut config = config_for(&server);
    config.timeout_ms = 100;
    config.retries = 1;
    let client = DownstreamClient::new(&config).unwrap();

    let widget: Widget = client.fetch("1").await.unwrap();
    assert_eq!(widget.color, "red");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn timeout_is_a_connectivity_failure() {
    let router = Router::new().route(
        "/{id}",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"id": "1", "color": "red"}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let mut config = config_for(&server);
    config.timeout_ms = 50;
    let client = DownstreamClient::new(&config).unwrap();

    let err = client.fetch::<Widget>("1").await.unwrap_err();
    assert!(matches!(err, FetchError::Connectivity(_)));
}

#[tokio::test]
async fn unparseable_body_is_a_connectivity_failure() {
    let router = Router::new().route("/{id}", get(|| async { "not json" }));
    let server = TestServer::start(router).await.unwrap();

    let client = DownstreamClient::new(&config_for(&server)).unwrap();
    let err = client.fetch::<Widget>("1").await.unwrap_err();

    assert!(matches!(err, FetchError::Connectivity(_)));
}

#[tokio::test]
async fn connection_refused_is_a_connectivity_failure() {
    // Bind then drop to get a port nothing is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        DownstreamClient::new(&DownstreamConfig::new(format!("http://{}", addr))).unwrap();
    let err = client.fetch::<Widget>("1").await.unwrap_err();

    assert!(matches!(err, FetchError::Connectivity(_)));
}
