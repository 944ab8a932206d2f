//! Soul identity.
//!
//! A soul is the identity a paint action is attributed to. The canvas only
//! ever sees it as an opaque, non-zero integer; zero is the "no identity"
//! sentinel used by identity resolvers and can never become a [`SoulId`].

use std::fmt;
use std::num::NonZeroI64;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`SoulId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SoulIdValidationError {
    /// The raw identifier is the zero sentinel.
    #[error("soul id must not be zero")]
    Zero,
}

/// Resolved, non-zero soul identifier.
///
/// # Examples
/// ```
/// use canvas::domain::SoulId;
///
/// let soul = SoulId::new(7).expect("non-zero id");
/// assert_eq!(soul.get(), 7);
/// assert!(SoulId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SoulId(NonZeroI64);

impl SoulId {
    /// Validate and construct a [`SoulId`].
    pub fn new(raw: i64) -> Result<Self, SoulIdValidationError> {
        NonZeroI64::new(raw)
            .map(Self)
            .ok_or(SoulIdValidationError::Zero)
    }

    /// Resolve a raw identity, treating the zero sentinel as absent.
    pub fn resolve(raw: i64) -> Option<Self> {
        Self::new(raw).ok()
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0.get()
    }
}

impl TryFrom<i64> for SoulId {
    type Error = SoulIdValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SoulId> for i64 {
    fn from(value: SoulId) -> Self {
        value.get()
    }
}

impl fmt::Display for SoulId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
