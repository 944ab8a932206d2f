//! Pixel paint coordination.
//!
//! [`PixelService`] implements the canvas driving ports on top of a
//! [`PixelRepository`]. It validates paint requests in a fixed order and
//! delegates every write to the repository, which is responsible for
//! linearizing concurrent paints. The service keeps no state of its own and
//! is shared between request handlers without locking.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{PixelRepository, PixelRepositoryError, PixelsCommand, PixelsQuery};
use crate::domain::{Color, Coordinate, Error, PaintPixelPayload, Pixel, SoulId, TraceId};

/// Canvas service implementing [`PixelsQuery`] and [`PixelsCommand`].
pub struct PixelService<R> {
    pixels: Arc<R>,
}

impl<R> Clone for PixelService<R> {
    fn clone(&self) -> Self {
        Self {
            pixels: Arc::clone(&self.pixels),
        }
    }
}

impl<R> PixelService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(pixels: Arc<R>) -> Self {
        Self { pixels }
    }
}

impl<R> PixelService<R>
where
    R: PixelRepository,
{
    fn log_store_failure(operation: &'static str, failure: &PixelRepositoryError) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(
            operation,
            trace_id = trace_id.as_deref().unwrap_or("-"),
            error = %failure,
            "pixel store failure"
        );
    }

    fn parse_color(raw: &str) -> Result<Color, Error> {
        raw.parse::<Color>().map_err(|_| Error::invalid_color())
    }

    fn parse_position(x: i64, y: i64) -> Result<(Coordinate, Coordinate), Error> {
        let x = Coordinate::new(x).map_err(|_| Error::invalid_coordinate())?;
        let y = Coordinate::new(y).map_err(|_| Error::invalid_coordinate())?;
        Ok((x, y))
    }
}

#[async_trait]
impl<R> PixelsQuery for PixelService<R>
where
    R: PixelRepository,
{
    async fn list_pixels(&self) -> Result<Vec<Pixel>, Error> {
        self.pixels.list_all().await.map_err(|failure| {
            Self::log_store_failure("list_pixels", &failure);
            Error::store_unavailable()
        })
    }
}

#[async_trait]
impl<R> PixelsCommand for PixelService<R>
where
    R: PixelRepository,
{
    async fn paint_pixel(&self, caller: Option<SoulId>, payload: &[u8]) -> Result<(), Error> {
        let owner = caller.ok_or_else(Error::unauthenticated)?;
        let request = PaintPixelPayload::decode(payload).map_err(|err| {
            debug!(error = %err, soul = %owner, "paint payload rejected");
            Error::malformed_request()
        })?;
        let color = Self::parse_color(&request.color)?;
        let (x, y) = Self::parse_position(request.x, request.y)?;

        self.pixels
            .paint(owner, x, y, color)
            .await
            .map_err(|failure| {
                Self::log_store_failure("paint_pixel", &failure);
                Error::store_write_failed()
            })?;

        debug!(soul = %owner, %x, %y, %color, "pixel painted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "pixel_service_tests.rs"]
mod tests;
