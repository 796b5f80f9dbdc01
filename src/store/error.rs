//! Error kinds for contact store operations.

use thiserror::Error;

/// Errors that can occur while validating, persisting, or retrieving
/// contacts.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was absent or empty.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Another contact already holds this email.
    #[error("Email already exists")]
    DuplicateEmail,

    /// No contact with the given identifier.
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
