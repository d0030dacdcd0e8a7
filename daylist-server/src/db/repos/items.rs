//! Item repository backed by Postgres
//!
//! One parameterized statement per operation:
//! - list: filter by date, ascending id
//! - insert: id assigned by the SERIAL column
//! - update/delete: by id, zero matched rows is not an error

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{DbError, ItemStore};
use crate::models::{Item, ItemDate, ItemId};

/// Item repository
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list_by_date(&self, date: ItemDate) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> =
            sqlx::query_as("SELECT id, title, date FROM items WHERE date = $1 ORDER BY id ASC")
                .bind(date.as_naive())
                .fetch_all(&self.pool)
                .await?;

        Ok(items)
    }

    async fn insert(&self, title: &str, date: ItemDate) -> Result<(), DbError> {
        sqlx::query("INSERT INTO items (title, date) VALUES ($1, $2)")
            .bind(title)
            .bind(date.as_naive())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_title(&self, id: ItemId, title: &str) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE items SET title = ($1) WHERE id = $2")
            .bind(title)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ItemId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
