//! Domain models with validation at construction
//!
//! Request parameters are parsed into these types before they reach the
//! store. Invalid input returns ValidationError, not panic.

pub mod date;
pub mod item;
pub mod validation;

pub use date::ItemDate;
pub use item::{Item, ItemId};
pub use validation::ValidationError;
