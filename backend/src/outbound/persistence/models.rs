//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::pixels;

/// Row struct for reading from the pixels table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pixels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PixelRow {
    pub x: i32,
    pub y: i32,
    pub color: String,
    pub owner_id: i64,
}

/// Insertable struct for painting a cell.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pixels)]
pub(crate) struct NewPixelRow<'a> {
    pub x: i32,
    pub y: i32,
    pub color: &'a str,
    pub owner_id: i64,
}
