//! tandem-gateway - HTTP aggregation layer
//!
//! This crate wires the downstream clients into the inbound HTTP surface:
//! one endpoint per aggregation strategy, a shared error translator, and
//! the router glue.
//!
//! # Usage
//!
//! ```ignore
//! use tandem_gateway::{create_router, AppState};
//!
//! let state = AppState::from_config(&config)?;
//! let router = create_router(state);
//! ```

pub mod error;
pub mod fanout;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the gateway router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Parallel fan-out: bicycle + brand fetched concurrently
        .route("/bicycles/{id}", get(handlers::bicycles::get_bicycle))
        // Sequential chained fetch: boat first, then its brand
        .route("/boats/{id}", get(handlers::boats::get_boat))
        // Unknown routes share the not-found rendering with downstream 404s
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
