//! Downstream record shapes and the composite response
//!
//! Each record mirrors the JSON body of one downstream service. Unknown
//! fields are tolerated on deserialization; the composer only ever selects
//! the named fields below.

use serde::{Deserialize, Serialize};

/// A bicycle record as served by the bicycle service.
#[derive(Debug, Clone, Deserialize)]
pub struct BicycleRecord {
    pub id: String,
    pub color: String,
}

/// A boat record as served by the boat service.
///
/// `brand` is the chaining key: it becomes the resource id of the follow-up
/// brand service call, it is not echoed into the composite as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct BoatRecord {
    pub id: String,
    pub color: String,
    pub brand: String,
}

/// A brand record as served by the brand service.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandRecord {
    pub name: String,
}

/// The gateway's composite response body.
///
/// Only constructed once every downstream call for the request has produced
/// a record; lives for one request/response cycle and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeRecord {
    pub id: String,
    pub color: String,
    pub brand: String,
}
