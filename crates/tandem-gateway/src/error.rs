//! Gateway error types and the downstream-to-gateway translation

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tandem_core::FetchError;

/// Gateway-level outcome of a failed request.
///
/// Every downstream failure is translated into exactly one of these before
/// any response is written; the caller never sees a partially composed
/// record.
#[derive(Debug)]
pub enum ApiError {
    /// 404 — a downstream reported the resource does not exist.
    /// Rendered by the same generic not-found path as an unknown route.
    NotFound,
    /// 400 Bad Request — a downstream rejected the request as malformed
    BadRequest(String),
    /// 500 — a downstream answered with a status the gateway does not handle
    UpstreamStatus(u16),
    /// 500 — a downstream could not be reached, timed out, or sent garbage
    Unavailable(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status(404) => ApiError::NotFound,
            FetchError::Status(400) => {
                ApiError::BadRequest("downstream rejected the resource request".to_string())
            }
            FetchError::Status(code) => ApiError::UpstreamStatus(code),
            FetchError::Connectivity(detail) => ApiError::Unavailable(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "resource not found".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::UpstreamStatus(code) => {
                tracing::error!(upstream_status = code, "unexpected downstream status");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
            ApiError::Unavailable(detail) => {
                tracing::error!(error = %detail, "downstream unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error".to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::debug!(error = error_type, %message, "gateway client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downstream_404_becomes_not_found() {
        assert!(matches!(
            ApiError::from(FetchError::Status(404)),
            ApiError::NotFound
        ));
    }

    #[test]
    fn downstream_400_becomes_bad_request() {
        assert!(matches!(
            ApiError::from(FetchError::Status(400)),
            ApiError::BadRequest(_)
        ));
    }

    #[test]
    fn other_statuses_become_internal() {
        assert!(matches!(
            ApiError::from(FetchError::Status(500)),
            ApiError::UpstreamStatus(500)
        ));
        assert!(matches!(
            ApiError::from(FetchError::Status(503)),
            ApiError::UpstreamStatus(503)
        ));
    }

    #[test]
    fn connectivity_becomes_unavailable() {
        assert!(matches!(
            ApiError::from(FetchError::Connectivity("refused".into())),
            ApiError::Unavailable(_)
        ));
    }
}
