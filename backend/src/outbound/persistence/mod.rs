//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and schema definitions stay private to this module, and
//! every database error is mapped into the owning port's error type.
//!
//! # Example
//!
//! ```no_run
//! use canvas::outbound::persistence::{DbPool, DieselPixelRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), canvas::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/canvas")).await?;
//! let repo = DieselPixelRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_pixel_repository;
mod diesel_soul_registry;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_pixel_repository::DieselPixelRepository;
pub use diesel_soul_registry::DieselSoulRegistry;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
