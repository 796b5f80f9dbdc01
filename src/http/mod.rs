//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → [access guard for mutating routes]
//!     → handlers.rs (deserialize, call store)
//!     → error.rs (map error kinds to status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::MakeRequestUuid;
pub use server::HttpServer;
