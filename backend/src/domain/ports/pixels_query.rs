//! Driving port for reading the canvas.

use async_trait::async_trait;

use crate::domain::{Error, Pixel};

/// Domain use-case port for listing pixels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PixelsQuery: Send + Sync {
    /// Return every painted pixel.
    ///
    /// An empty canvas yields an empty vector. Any store failure is reported
    /// as [`crate::domain::ErrorCode::StoreUnavailable`] and no partial list
    /// is returned.
    async fn list_pixels(&self) -> Result<Vec<Pixel>, Error>;
}
