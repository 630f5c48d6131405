//! Admin backend for the book purchase and rental platform.
//!
//! The crate follows a hexagonal layout:
//! - [`domain`] holds admin accounts, reporting aggregates, and the ports
//!   that adapters implement.
//! - [`inbound`] exposes the Actix HTTP surface (cookie sessions, page
//!   view-models, error envelopes).
//! - [`outbound`] provides Diesel persistence, argon2 hashing, and JWT
//!   session tokens.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
