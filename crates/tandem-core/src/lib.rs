//! tandem-core - Core types for the tandem aggregation gateway
//!
//! This crate holds everything the gateway and its downstream client share:
//! the downstream record shapes, the composite response assembly, the tagged
//! downstream failure type, and the configuration snapshot.

pub mod compose;
pub mod config;
pub mod error;
pub mod models;

pub use config::{DownstreamConfig, GatewayConfig, ServerConfig};
pub use error::{FetchError, FetchResult};
pub use models::{BicycleRecord, BoatRecord, BrandRecord, CompositeRecord};
