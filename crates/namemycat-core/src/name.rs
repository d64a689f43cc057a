//! Cat name records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};

/// Name shown on the home page when the table has no rows.
pub const DEFAULT_NAME: &str = "Cat";

/// Identifier of a stored name, backed by the table's `SERIAL` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(i32);

impl NameId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw database identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for NameId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A persisted candidate cat name.
///
/// Names are created once and never mutated or deleted by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Row identifier.
    pub id: NameId,
    /// The name exactly as submitted.
    pub value: String,
}

impl Name {
    /// Create a name record from a stored row.
    #[must_use]
    pub fn new(id: NameId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Check that a submitted name may be stored.
///
/// Only the zero-length string is rejected; whitespace is stored as given.
///
/// # Errors
///
/// Returns `NameError::EmptyName` if `value` is empty.
pub fn validate_name(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(NameError::EmptyName);
    }
    Ok(())
}
