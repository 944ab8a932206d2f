//! Shared helpers for the PostgreSQL integration suites.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! helpers shared by the Diesel suites live here and are pulled in with
//! `mod support;`.

pub mod cluster;
pub mod embedded_postgres;

pub use cluster::{handle_cluster_setup_failure, shared_cluster_handle};
pub use embedded_postgres::{drop_table, provision_template_database};

/// Render a `postgres` error with its SQLSTATE and message.
///
/// `postgres::Error`'s `Display` collapses database errors to `db error`,
/// which hides what actually failed.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}
