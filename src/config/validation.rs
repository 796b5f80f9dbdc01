//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyDatabasePath,
    ZeroRequestTimeout,
    InvalidOrigin(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "bind address {:?} is not a valid socket address", addr)
            }
            ValidationError::EmptyDatabasePath => write!(f, "database path is empty"),
            ValidationError::ZeroRequestTimeout => write!(f, "request timeout must be non-zero"),
            ValidationError::InvalidOrigin(origin) => {
                write!(f, "CORS origin {:?} is not a valid origin", origin)
            }
        }
    }
}

/// Check the semantic constraints a loaded configuration must satisfy.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.database.path.trim().is_empty() {
        errors.push(ValidationError::EmptyDatabasePath);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    for origin in &config.cors.allowed_origins {
        if origin.is_empty() || origin.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
