//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PixelsCommand, PixelsQuery, SoulRegistry};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pixels_query: Arc<dyn PixelsQuery>,
    pub pixels_command: Arc<dyn PixelsCommand>,
    pub souls: Arc<dyn SoulRegistry>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use canvas::domain::PixelService;
    /// use canvas::inbound::http::state::HttpState;
    /// use canvas::outbound::memory::{InMemoryPixelRepository, InMemorySoulRegistry};
    ///
    /// let service = Arc::new(PixelService::new(Arc::new(InMemoryPixelRepository::default())));
    /// let state = HttpState::new(
    ///     service.clone(),
    ///     service,
    ///     Arc::new(InMemorySoulRegistry::default()),
    /// );
    /// let _souls = state.souls.clone();
    /// ```
    pub fn new(
        pixels_query: Arc<dyn PixelsQuery>,
        pixels_command: Arc<dyn PixelsCommand>,
        souls: Arc<dyn SoulRegistry>,
    ) -> Self {
        Self {
            pixels_query,
            pixels_command,
            souls,
        }
    }
}
