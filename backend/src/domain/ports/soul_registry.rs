//! Port for minting soul identities.
//!
//! Identity is owned outside the canvas; this port is the narrow seam the
//! service uses to hand a brand new soul to a client that has none.

use async_trait::async_trait;

use crate::domain::SoulId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by soul registry adapters.
    pub enum SoulRegistryError {
        /// Registry connection could not be established.
        Connection { message: String } =>
            "soul registry connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "soul registry query failed: {message}",
    }
}

/// Port for registering new souls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SoulRegistry: Send + Sync {
    /// Allocate a fresh, never before issued soul identifier.
    async fn register(&self) -> Result<SoulId, SoulRegistryError>;
}
