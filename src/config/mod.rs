//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by ownership into the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once at startup; request handling never touches
//!   the environment
//! - All fields have defaults so the service runs with an empty environment
//! - Validation separates syntactic (parsing) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_from_env;
pub use schema::AppConfig;
pub use schema::AuthConfig;
pub use schema::CorsConfig;
pub use schema::ListenerConfig;
