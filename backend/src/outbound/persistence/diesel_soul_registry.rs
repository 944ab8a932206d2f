//! PostgreSQL-backed `SoulRegistry` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::SoulId;
use crate::domain::ports::{SoulRegistry, SoulRegistryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::souls;

/// Diesel-backed soul registry drawing identifiers from the `souls` sequence.
#[derive(Clone)]
pub struct DieselSoulRegistry {
    pool: DbPool,
}

impl DieselSoulRegistry {
    /// Create a new registry with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SoulRegistry for DieselSoulRegistry {
    async fn register(&self) -> Result<SoulId, SoulRegistryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SoulRegistryError::connection))?;

        let id: i64 = diesel::insert_into(souls::table)
            .default_values()
            .returning(souls::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(err, SoulRegistryError::query, SoulRegistryError::connection)
            })?;

        SoulId::new(id).map_err(|err| SoulRegistryError::query(format!("issued id: {err}")))
    }
}
