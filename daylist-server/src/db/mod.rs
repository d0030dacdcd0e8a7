//! Database layer - connection pool, schema and item stores
//!
//! Handlers only see the `ItemStore` trait. The Postgres implementation runs
//! on a bounded pool; the in-memory one has the same contract.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryItemStore;
pub use pool::{create_pool, PoolSettings};
pub use repos::PgItemStore;
pub use store::{DbError, ItemStore};
