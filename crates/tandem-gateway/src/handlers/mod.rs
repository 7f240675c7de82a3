//! Request handlers, one module per aggregation endpoint

pub mod bicycles;
pub mod boats;

use crate::error::ApiError;

/// Fallback for unknown routes.
///
/// Downstream 404s translate to `ApiError::NotFound` and render through
/// the same path, so a missing downstream resource is indistinguishable
/// from a route that never existed.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
