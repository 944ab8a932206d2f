//! In-process adapters used when no database is configured.
//!
//! The canvas lives in a single `Mutex<BTreeMap>` keyed by `(x, y)`. Every
//! paint is one insert under the lock, which linearizes writes and makes the
//! last writer win. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{
    PixelRepository, PixelRepositoryError, SoulRegistry, SoulRegistryError,
};
use crate::domain::{Color, Coordinate, Pixel, SoulId};

/// Pixel repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryPixelRepository {
    pixels: Mutex<BTreeMap<(Coordinate, Coordinate), Pixel>>,
}

fn poisoned() -> PixelRepositoryError {
    PixelRepositoryError::connection("in-memory canvas lock poisoned")
}

#[async_trait]
impl PixelRepository for InMemoryPixelRepository {
    async fn list_all(&self) -> Result<Vec<Pixel>, PixelRepositoryError> {
        let pixels = self.pixels.lock().map_err(|_| poisoned())?;
        Ok(pixels.values().copied().collect())
    }

    async fn paint(
        &self,
        owner: SoulId,
        x: Coordinate,
        y: Coordinate,
        color: Color,
    ) -> Result<(), PixelRepositoryError> {
        let mut pixels = self.pixels.lock().map_err(|_| poisoned())?;
        pixels.insert(
            (x, y),
            Pixel {
                x,
                y,
                color,
                owner,
            },
        );
        Ok(())
    }
}

/// Soul registry handing out sequential identifiers starting at 1.
#[derive(Debug)]
pub struct InMemorySoulRegistry {
    next: AtomicI64,
}

impl Default for InMemorySoulRegistry {
    fn default() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl SoulRegistry for InMemorySoulRegistry {
    async fn register(&self) -> Result<SoulId, SoulRegistryError> {
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        SoulId::new(raw).map_err(|_| SoulRegistryError::query("soul id space exhausted"))
    }
}
