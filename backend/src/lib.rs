//! Collaborative pixel canvas backend.
//!
//! The [`domain`] holds the canvas rules and ports, [`inbound`] adapts HTTP
//! requests onto them, and [`outbound`] provides the in-memory and
//! PostgreSQL stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
