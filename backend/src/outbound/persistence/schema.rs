//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the schema, regenerate them with `diesel print-schema`.

diesel::table! {
    /// Painted canvas cells.
    ///
    /// The composite primary key `(x, y)` guarantees at most one row per cell
    /// and serialises concurrent paints of the same cell.
    pixels (x, y) {
        /// Column index, never negative.
        x -> Int4,
        /// Row index, never negative.
        y -> Int4,
        /// Palette color name.
        color -> Varchar,
        /// Soul that last painted the cell.
        owner_id -> Int8,
    }
}

diesel::table! {
    /// Issued soul identities.
    souls (id) {
        /// Primary key: sequence-backed, starts at 1.
        id -> Int8,
    }
}
