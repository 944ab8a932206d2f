//! Port for canvas pixel persistence.
//!
//! The [`PixelRepository`] trait is the pixel store boundary. Adapters own
//! durability and must linearize concurrent [`PixelRepository::paint`] calls
//! on the same coordinate: the last write to complete wins and no write is
//! lost or torn.

use async_trait::async_trait;

use crate::domain::{Color, Coordinate, Pixel, SoulId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by pixel repository adapters.
    pub enum PixelRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "pixel repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "pixel repository query failed: {message}",
    }
}

/// Port for reading and painting canvas pixels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PixelRepository: Send + Sync {
    /// Fetch every painted pixel, in no particular order.
    async fn list_all(&self) -> Result<Vec<Pixel>, PixelRepositoryError>;

    /// Create or overwrite the pixel at `(x, y)`.
    ///
    /// At most one pixel exists per coordinate; painting an existing one
    /// replaces both its color and its owner.
    async fn paint(
        &self,
        owner: SoulId,
        x: Coordinate,
        y: Coordinate,
        color: Color,
    ) -> Result<(), PixelRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn connection_error_formats_message() {
        let error = PixelRepositoryError::connection("pool exhausted");
        assert_eq!(
            error.to_string(),
            "pixel repository connection failed: pool exhausted"
        );
    }

    #[rstest]
    fn query_error_formats_message() {
        let error = PixelRepositoryError::query("unknown color `teal`");
        assert!(error.to_string().contains("unknown color `teal`"));
    }
}
