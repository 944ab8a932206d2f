//! PostgreSQL-backed `PixelRepository` implementation using Diesel ORM.
//!
//! Each paint is a single `INSERT … ON CONFLICT (x, y) DO UPDATE`, so the
//! primary key linearizes concurrent writes to one cell and the last writer
//! wins.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PixelRepository, PixelRepositoryError};
use crate::domain::{Color, Coordinate, Pixel, SoulId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPixelRow, PixelRow};
use super::pool::DbPool;
use super::schema::pixels;

/// Diesel-backed implementation of the pixel repository port.
#[derive(Clone)]
pub struct DieselPixelRepository {
    pool: DbPool,
}

impl DieselPixelRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(error: diesel::result::Error) -> PixelRepositoryError {
    map_diesel_error(
        error,
        PixelRepositoryError::query,
        PixelRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain pixel.
fn row_to_pixel(row: PixelRow) -> Result<Pixel, PixelRepositoryError> {
    let PixelRow {
        x,
        y,
        color,
        owner_id,
    } = row;

    let x = Coordinate::new(i64::from(x))
        .map_err(|err| PixelRepositoryError::query(format!("stored x: {err}")))?;
    let y = Coordinate::new(i64::from(y))
        .map_err(|err| PixelRepositoryError::query(format!("stored y: {err}")))?;
    let color = color
        .parse::<Color>()
        .map_err(|err| PixelRepositoryError::query(format!("stored color: {err}")))?;
    let owner = SoulId::new(owner_id)
        .map_err(|err| PixelRepositoryError::query(format!("stored owner: {err}")))?;

    Ok(Pixel {
        x,
        y,
        color,
        owner,
    })
}

#[async_trait]
impl PixelRepository for DieselPixelRepository {
    async fn list_all(&self) -> Result<Vec<Pixel>, PixelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PixelRepositoryError::connection))?;

        let rows: Vec<PixelRow> = pixels::table
            .order((pixels::x.asc(), pixels::y.asc()))
            .select(PixelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(to_port_error)?;

        rows.into_iter().map(row_to_pixel).collect()
    }

    async fn paint(
        &self,
        owner: SoulId,
        x: Coordinate,
        y: Coordinate,
        color: Color,
    ) -> Result<(), PixelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PixelRepositoryError::connection))?;
        let row = NewPixelRow {
            x: x.get(),
            y: y.get(),
            color: color.as_str(),
            owner_id: owner.get(),
        };

        diesel::insert_into(pixels::table)
            .values(&row)
            .on_conflict((pixels::x, pixels::y))
            .do_update()
            .set((
                pixels::color.eq(excluded(pixels::color)),
                pixels::owner_id.eq(excluded(pixels::owner_id)),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(to_port_error)
    }
}
