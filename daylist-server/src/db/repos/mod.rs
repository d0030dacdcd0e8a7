//! Repository implementations for database access
//!
//! Each repository issues one parameterized statement per call and leaves
//! isolation to the database defaults.

pub mod items;

pub use items::PgItemStore;
