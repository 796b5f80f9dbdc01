//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Parse { name: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from environment variables.
///
/// Unset variables fall back to the defaults in [`AppConfig`]. Empty values
/// for `API_KEY` and `CORS_ORIGINS` are treated as unset.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Ok(value) = env::var("BIND_ADDRESS") {
        if !value.is_empty() {
            config.listener.bind_address = value;
        }
    }

    if let Ok(value) = env::var("SQLITE_PATH") {
        if !value.is_empty() {
            config.database.path = value;
        }
    }

    if let Ok(value) = env::var("API_KEY") {
        if !value.is_empty() {
            config.auth.api_key = Some(value);
        }
    }

    if let Ok(value) = env::var("CORS_ORIGINS") {
        config.cors.allowed_origins = parse_origins(&value);
    }

    if let Ok(value) = env::var("REQUEST_TIMEOUT_SECS") {
        config.timeouts.request_secs = value.parse().map_err(|_| ConfigError::Parse {
            name: "REQUEST_TIMEOUT_SECS",
            value,
        })?;
    }

    if let Ok(value) = env::var("MAX_BODY_SIZE") {
        config.security.max_body_size = value.parse().map_err(|_| ConfigError::Parse {
            name: "MAX_BODY_SIZE",
            value,
        })?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Split a comma-separated origin list. `"*"` (or an empty string) means
/// any origin and maps to an empty list.
fn parse_origins(value: &str) -> Vec<String> {
    if value.trim() == "*" {
        return Vec::new();
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origins_mean_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn origin_list_is_split_and_trimmed() {
        let origins = parse_origins("https://a.example, https://b.example");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }
}
