//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! A `.env` file is honored when present; loading it never touches stdout,
//! which belongs to the command loop.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_LOG_LEVEL: &str = "error";
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used as the tracing env-filter default (default: "error")
    pub log_level: String,

    /// Prompt text printed before each command read
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PROMPT`: REPL prompt text (default: "Enter a command: ")
    ///
    /// Nothing is required, so a bare environment yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `PROMPT` is set but blank.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if it exists, without failing when it doesn't
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let prompt = match env::var("PROMPT") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "PROMPT".to_string(),
                        reason: "Cannot be blank".to_string(),
                    });
                }
                value
            }
            Err(_) => DEFAULT_PROMPT.to_string(),
        };

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
