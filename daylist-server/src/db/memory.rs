//! In-process item store
//!
//! Same contract as the Postgres repository. Used by `--memory` and by the
//! router tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{DbError, ItemStore};
use crate::models::{Item, ItemDate, ItemId};

#[derive(Debug, Default)]
struct Inner {
    /// Kept in insertion order, which is ascending id
    items: Vec<Item>,
    next_id: i32,
}

/// Item store held in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items across all dates.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_by_date(&self, date: ItemDate) -> Result<Vec<Item>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .iter()
            .filter(|item| item.date == date.as_naive())
            .cloned()
            .collect())
    }

    async fn insert(&self, title: &str, date: ItemDate) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.items.push(Item {
            id,
            title: title.to_owned(),
            date: date.as_naive(),
        });
        Ok(())
    }

    async fn update_title(&self, id: ItemId, title: &str) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        match inner.items.iter_mut().find(|item| item.id == id.get()) {
            Some(item) => {
                item.title = title.to_owned();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id.get());
        Ok((before - inner.items.len()) as u64)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
