//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::PixelService;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryPixelRepository, InMemorySoulRegistry};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// HTTP state wired to fresh in-memory adapters.
pub fn in_memory_state() -> HttpState {
    let service = Arc::new(PixelService::new(Arc::new(
        InMemoryPixelRepository::default(),
    )));
    HttpState::new(
        service.clone(),
        service,
        Arc::new(InMemorySoulRegistry::default()),
    )
}
