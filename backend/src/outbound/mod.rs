//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local pixel store and soul registry
//! - **persistence**: PostgreSQL-backed adapters using Diesel ORM
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no canvas rules.

pub mod memory;
pub mod persistence;
