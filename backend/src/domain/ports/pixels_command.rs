//! Driving port for painting the canvas.

use async_trait::async_trait;

use crate::domain::{Error, SoulId};

/// Domain use-case port for painting a single pixel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PixelsCommand: Send + Sync {
    /// Validate a raw paint request and apply it.
    ///
    /// `caller` is the soul resolved by the identity layer, `None` when
    /// resolution failed. `payload` is the undecoded request body. Checks run
    /// in this order, stopping at the first failure:
    ///
    /// 1. caller present, else `Unauthenticated`;
    /// 2. payload decodes, else `MalformedRequest`;
    /// 3. color is in the palette, else `InvalidColor`;
    /// 4. both coordinates are in range, else `InvalidCoordinate`.
    ///
    /// A failed store write is reported as `StoreWriteFailed`.
    async fn paint_pixel(&self, caller: Option<SoulId>, payload: &[u8]) -> Result<(), Error>;
}
