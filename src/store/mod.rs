//! Contact persistence subsystem.
//!
//! # Data Flow
//! ```text
//! Create:
//!     NewContact (deserialized request body)
//!     → contact.rs (required-field validation)
//!     → repository.rs (duplicate probe, insert, UNIQUE constraint backstop)
//!     → Contact (stored record with server-assigned id + created_at)
//!
//! Read:
//!     repository.rs (list newest-first / lookup by id)
//!     → Contact
//! ```
//!
//! # Design Decisions
//! - Email uniqueness is guaranteed by the UNIQUE column constraint; the
//!   application-level probe only exists to produce a specific error on the
//!   common path
//! - Records are immutable once inserted; there is no update or delete
//! - Every operation returns a named StoreError kind; HTTP status mapping
//!   happens at the transport boundary, not here

pub mod contact;
pub mod error;
pub mod repository;

pub use contact::{Contact, NewContact};
pub use error::StoreError;
pub use repository::ContactStore;
