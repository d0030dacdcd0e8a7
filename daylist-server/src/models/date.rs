//! Date partition parsing
//!
//! Items are grouped by calendar day. Requests carry the day as an optional
//! `YYYY-MM-DD` string; absent or blank means the current UTC day.

use std::fmt;

use chrono::{NaiveDate, Utc};

use super::ValidationError;

/// Wire format for dates in query strings, forms and redirects
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day used as the partition key for items
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemDate(NaiveDate);

impl ItemDate {
    /// The current UTC calendar day.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// # Example
    /// ```
    /// use daylist_server::models::ItemDate;
    ///
    /// assert!(ItemDate::parse("2024-01-01").is_ok());
    /// assert!(ItemDate::parse("01/01/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "date" });
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "date",
                value: trimmed.to_owned(),
                reason: "expected YYYY-MM-DD",
            })
    }

    /// Resolve an optional request parameter, defaulting to today when the
    /// parameter is missing or blank.
    pub fn or_today(param: Option<&str>) -> Result<Self, ValidationError> {
        match param.map(str::trim) {
            None | Some("") => Ok(Self::today()),
            Some(s) => Self::parse(s),
        }
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ItemDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ItemDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
