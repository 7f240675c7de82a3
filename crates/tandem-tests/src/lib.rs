//! Shared helpers for tandem integration tests
//!
//! Provides recording downstream stubs and shortcuts for standing up a
//! fully wired gateway against them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use tandem_client::testing::TestServer;
use tandem_core::config::{DownstreamConfig, GatewayConfig, ServerConfig};
use tandem_gateway::{create_router, AppState};

type Responder = Arc<dyn Fn(&str) -> (StatusCode, Value) + Send + Sync>;

/// A downstream stub that records every id it is asked for and serves a
/// canned response, optionally after a delay.
#[derive(Clone)]
pub struct StubService {
    requests: Arc<Mutex<Vec<String>>>,
    hits: Arc<AtomicUsize>,
    responder: Responder,
    delay: Option<Duration>,
}

impl StubService {
    /// Stub that answers every id with 200 and `body`.
    pub fn json(body: Value) -> Self {
        Self::with(move |_| (StatusCode::OK, body.clone()))
    }

    /// Stub that answers every id with `status` and an empty object body.
    pub fn status(status: StatusCode) -> Self {
        Self::with(move |_| (status, Value::Object(Default::default())))
    }

    /// Stub with a per-id response function.
    pub fn with(responder: impl Fn(&str) -> (StatusCode, Value) + Send + Sync + 'static) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            hits: Arc::new(AtomicUsize::new(0)),
            responder: Arc::new(responder),
            delay: None,
        }
    }

    /// Delay every response, for driving the caller into its timeout.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many requests this stub has served.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The ids requested so far, in arrival order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Router speaking the downstream contract for this stub.
    pub fn router(&self) -> Router {
        let stub = self.clone();
        Router::new().route(
            "/{id}",
            get(move |Path(id): Path<String>| {
                let stub = stub.clone();
                async move { stub.handle(&id).await }
            }),
        )
    }

    /// Serve this stub on an ephemeral port.
    pub async fn start(&self) -> TestServer {
        TestServer::start(self.router())
            .await
            .expect("stub server failed to start")
    }

    async fn handle(&self, id: &str) -> Response {
        self.requests.lock().unwrap().push(id.to_string());
        self.hits.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let (status, body) = (self.responder)(id);
        (status, Json(body)).into_response()
    }
}

/// Gateway config pointing at the given downstream base URLs, with short
/// timeouts suitable for tests.
pub fn gateway_config(bicycle: &str, boat: &str, brand: &str) -> GatewayConfig {
    GatewayConfig {
        server: ServerConfig::default(),
        bicycle: test_downstream(bicycle),
        boat: test_downstream(boat),
        brand: test_downstream(brand),
    }
}

fn test_downstream(url: &str) -> DownstreamConfig {
    DownstreamConfig {
        url: url.to_string(),
        timeout_ms: 1000,
        retries: 0,
    }
}

/// Stand up a gateway wired per `config` on an ephemeral port.
pub async fn start_gateway(config: &GatewayConfig) -> TestServer {
    let state = AppState::from_config(config).expect("gateway state failed to build");
    TestServer::start(create_router(state))
        .await
        .expect("gateway server failed to start")
}

/// A base URL with nothing listening behind it (connection refused).
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{}", addr)
}
