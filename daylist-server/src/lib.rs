//! daylist-server: server-rendered to-do list scoped by date
//!
//! Lists, adds, edits and deletes items of one `items` table. Handlers talk
//! to storage through the `ItemStore` trait; Postgres is the production
//! backend.

pub mod db;
pub mod http;
pub mod models;
pub mod view;

pub use db::{DbError, ItemStore, MemoryItemStore, PgItemStore};
pub use http::{run_server, ServerConfig};
