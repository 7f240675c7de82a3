//! Failure outcome of a single downstream call

use thiserror::Error;

/// Result type for downstream fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a downstream call produced no record.
///
/// `Status` means the downstream answered and the answer was a non-2xx
/// code; `Connectivity` means no usable answer arrived at all (connection
/// refused, timeout, or an unparseable body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Downstream responded with a non-2xx status code
    #[error("downstream responded with status {0}")]
    Status(u16),

    /// Downstream unreachable, timed out, or sent an unparseable body
    #[error("downstream unreachable: {0}")]
    Connectivity(String),
}

impl FetchError {
    /// Whether this failure carries a definitive HTTP status from the
    /// downstream, as opposed to the call never completing.
    pub fn has_status(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}
