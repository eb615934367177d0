// shopdesk-api: Async HTTP client for the shopdesk back-office REST API.
//
// Owns transport mechanics only: one configured reqwest client, envelope
// unwrapping, and centralized error normalization. Domain semantics
// (caching, enrichment, guards) live in shopdesk-core.

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;

pub use auth::UserInfo;
pub use client::{AdminClient, ListPage};
pub use error::Error;
pub use transport::TransportConfig;
