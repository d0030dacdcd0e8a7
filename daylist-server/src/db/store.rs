//! Data-access interface injected into the HTTP layer

use async_trait::async_trait;

use crate::models::{Item, ItemDate, ItemId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage for to-do items.
///
/// Each method maps to a single statement; no transactions span calls.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items for a day, ascending by id.
    async fn list_by_date(&self, date: ItemDate) -> Result<Vec<Item>, DbError>;

    /// Insert a new item. The store assigns the id.
    async fn insert(&self, title: &str, date: ItemDate) -> Result<(), DbError>;

    /// Replace the title of an item. Returns the number of rows changed.
    async fn update_title(&self, id: ItemId, title: &str) -> Result<u64, DbError>;

    /// Delete an item. Returns the number of rows removed (0 is not an error).
    async fn delete(&self, id: ItemId) -> Result<u64, DbError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
