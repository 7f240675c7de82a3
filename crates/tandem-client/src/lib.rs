//! tandem-client - HTTP client for tandem downstream services
//!
//! One `DownstreamClient` talks to one downstream service speaking the
//! "fetch record by id" contract. The gateway holds one client per
//! configured downstream.

pub mod client;
pub mod error;
pub mod testing;

pub use client::DownstreamClient;
pub use error::ClientError;
