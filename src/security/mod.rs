//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Mutating request:
//!     → access_control.rs (X-API-KEY vs configured secret)
//!     → Pass to handler, or 401/500
//!
//! Read-only requests bypass the guard entirely.
//! ```
//!
//! # Design Decisions
//! - Fail closed: a server without a configured secret refuses writes
//! - Pure decision function; no side effects, no mutation

pub mod access_control;

pub use access_control::{require_api_key, API_KEY_HEADER};
