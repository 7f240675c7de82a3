//! Settling concurrently issued downstream calls
//!
//! The parallel strategy waits for every call before deciding, so a late
//! outcome can never overturn an already written response.

use tandem_core::error::{FetchError, FetchResult};

/// Settle two concurrent downstream outcomes into one decision.
///
/// Both records are required for composition, so any failure fails the
/// request. When both calls failed, the tie-break is deterministic: a
/// failure carrying an HTTP status wins over a pure connectivity failure,
/// so a definitive downstream answer (404, 400) is not masked by a sibling
/// timeout; when neither or both carry a status, the first call in
/// declaration order wins.
pub fn settle<A, B>(first: FetchResult<A>, second: FetchResult<B>) -> Result<(A, B), FetchError> {
    match (first, second) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(err), Ok(_)) => Err(err),
        (Ok(_), Err(err)) => Err(err),
        (Err(first_err), Err(second_err)) => {
            if !first_err.has_status() && second_err.has_status() {
                Err(second_err)
            } else {
                Err(first_err)
            }
        }
    }
}
