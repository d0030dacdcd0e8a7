//! To-do item record and identifier

use std::fmt;

use chrono::NaiveDate;
use sqlx::FromRow;

use super::ValidationError;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    /// Assigned by the database on insert, never reassigned
    pub id: i32,
    pub title: String,
    /// Partition key for display
    pub date: NaiveDate,
}

/// Identifier of an existing item, parsed from form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(i32);

impl ItemId {
    /// Parse an item id from a form field.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "item id" });
        }

        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "item id",
                value: trimmed.to_owned(),
                reason: "expected an integer",
            })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(ItemId::parse("42").unwrap().get(), 42);
        assert_eq!(ItemId::parse(" 7 ").unwrap().get(), 7);
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(
            ItemId::parse("").unwrap_err(),
            ValidationError::Empty { field: "item id" }
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        for bad in ["abc", "1.5", "99999999999"] {
            assert!(
                matches!(
                    ItemId::parse(bad),
                    Err(ValidationError::InvalidFormat { field: "item id", .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
