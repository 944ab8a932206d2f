//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations such as binding or resolving a soul.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, SoulId};

pub(crate) const SOUL_ID_KEY: &str = "soul_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind a soul to the session cookie.
    pub fn persist_soul(&self, soul: SoulId) -> Result<(), Error> {
        self.0
            .insert(SOUL_ID_KEY, soul.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Resolve the caller's soul.
    ///
    /// A missing, unreadable, or zero identity all resolve to `None`; the
    /// domain decides what an absent soul means for each operation.
    pub fn soul(&self) -> Option<SoulId> {
        let raw = match self.0.get::<i64>(SOUL_ID_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!("unreadable soul id in session cookie: {error}");
                return None;
            }
        };
        let soul = SoulId::resolve(raw);
        if soul.is_none() {
            warn!("zero soul id in session cookie");
        }
        soul
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
