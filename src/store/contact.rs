//! Contact record and creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::error::StoreError;

/// A stored contact. `id` and `created_at` are server-assigned at creation
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied input for contact creation.
///
/// Required fields are `Option` so that absence can be reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl NewContact {
    /// Check required fields in the fixed order [name, email], naming the
    /// first one that is absent or empty after trimming.
    pub fn validate(&self) -> Result<(), StoreError> {
        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => return Err(StoreError::MissingField { field }),
            }
        }
        Ok(())
    }
}
