//! Contact storage repository.

use std::path::Path;

use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::store::contact::{Contact, NewContact};
use crate::store::error::StoreError;

/// Repository for contact storage and retrieval.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Clone)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    /// Open (or create) the database at the given path and apply the schema.
    pub async fn connect(database_path: &str) -> Result<Self, StoreError> {
        if let Some(dir) = Path::new(database_path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(sqlx::Error::Io)?;
            }
        }

        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create an in-memory store for testing.
    ///
    /// Uses a single connection: each in-memory SQLite connection is its
    /// own database, so a larger pool would see different data per
    /// connection.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Initialize the database schema.
    ///
    /// AUTOINCREMENT keeps identifiers strictly increasing and never
    /// reused; the UNIQUE constraint on email is the actual uniqueness
    /// guarantee under concurrent writers.
    async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone TEXT,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Validate and persist a new contact, returning the stored record.
    ///
    /// Fails with `MissingField` when `name` or `email` is absent or empty,
    /// and with `DuplicateEmail` when another contact already holds the
    /// email; neither failure mutates the store.
    pub async fn create(&self, input: &NewContact) -> Result<Contact, StoreError> {
        input.validate()?;

        // Both are Some after validation.
        let name = input.name.as_deref().unwrap_or_default();
        let email = input.email.as_deref().unwrap_or_default();

        // Fast path for the common sequential case; the UNIQUE constraint
        // below still catches writers racing between probe and insert.
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM contacts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(StoreError::DuplicateEmail);
        }

        let contact = sqlx::query_as::<_, Contact>(
            r"
            INSERT INTO contacts (name, email, phone, notes, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, phone, notes, created_at
            ",
        )
        .bind(name)
        .bind(email)
        .bind(&input.phone)
        .bind(&input.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        tracing::debug!(id = contact.id, "Contact stored");
        Ok(contact)
    }

    /// Get all contacts, newest first; ties broken by reverse insertion
    /// order.
    pub async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r"
            SELECT id, name, email, phone, notes, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    /// Look up a single contact by identifier.
    pub async fn get(&self, id: i64) -> Result<Contact, StoreError> {
        let contact = sqlx::query_as::<_, Contact>(
            r"
            SELECT id, name, email, phone, notes, created_at
            FROM contacts
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        contact.ok_or(StoreError::NotFound(id))
    }
}

/// Translate a storage-level uniqueness violation on insert into the same
/// conflict outcome as the application-level probe.
fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str) -> NewContact {
        NewContact {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            ..NewContact::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_identical_record() {
        let store = ContactStore::in_memory().await.unwrap();

        let input = NewContact {
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            phone: Some("11999999999".to_string()),
            notes: Some("met at the conference".to_string()),
        };
        let created = store.create(&input).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@x.com");
        assert_eq!(created.phone.as_deref(), Some("11999999999"));

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing() {
        let store = ContactStore::in_memory().await.unwrap();

        let a = store.create(&candidate("A", "a@x.com")).await.unwrap();
        let b = store.create(&candidate("B", "b@x.com")).await.unwrap();
        let c = store.create(&candidate("C", "c@x.com")).await.unwrap();

        assert!(a.id < b.id && b.id < c.id);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_without_insert() {
        let store = ContactStore::in_memory().await.unwrap();

        let err = store.create(&NewContact::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingField { field: "name" }));

        let err = store
            .create(&NewContact {
                name: Some("Ana".to_string()),
                ..NewContact::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingField { field: "email" }));

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = ContactStore::in_memory().await.unwrap();

        store.create(&candidate("Ana", "ana@x.com")).await.unwrap();
        let err = store
            .create(&candidate("Bea", "ana@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));

        let contacts = store.list().await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ana");
    }

    #[tokio::test]
    async fn unique_violation_from_storage_maps_to_duplicate_email() {
        let store = ContactStore::in_memory().await.unwrap();
        store.create(&candidate("Ana", "ana@x.com")).await.unwrap();

        // Insert behind the probe's back to hit the constraint directly,
        // as a racing writer would.
        let err = sqlx::query(
            r"
            INSERT INTO contacts (name, email, phone, notes, created_at)
            VALUES ('Bea', 'ana@x.com', NULL, NULL, ?)
            ",
        )
        .bind(Utc::now())
        .execute(&store.pool)
        .await
        .unwrap_err();

        assert!(matches!(map_insert_error(err), StoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = ContactStore::in_memory().await.unwrap();

        store.create(&candidate("A", "a@x.com")).await.unwrap();
        store.create(&candidate("B", "b@x.com")).await.unwrap();
        store.create(&candidate("C", "c@x.com")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = ContactStore::in_memory().await.unwrap();

        let err = store.get(999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
    }

    #[tokio::test]
    async fn optional_fields_roundtrip_as_none() {
        let store = ContactStore::in_memory().await.unwrap();

        let created = store.create(&candidate("Ana", "ana@x.com")).await.unwrap();
        assert_eq!(created.phone, None);
        assert_eq!(created.notes, None);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.phone, None);
        assert_eq!(fetched.notes, None);
    }
}
