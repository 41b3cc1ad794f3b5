//! Error types for the rolodex contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// An operation referenced a name or phone number the book does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record exists under the given name
    #[error("Contact not found: {0}")]
    Contact(String),

    /// The record has no such phone number to edit
    #[error("Phone number not found: {0}")]
    Phone(String),
}

/// A command was invoked with the wrong number of arguments.
///
/// Detected at the command layer before any book operation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Incomplete command. Usage: {usage}")]
pub struct ArityError {
    /// Usage line shown to the user
    pub usage: &'static str,
}

impl ArityError {
    pub fn new(usage: &'static str) -> Self {
        Self { usage }
    }
}

/// Any failure a command handler can surface.
///
/// Handlers compose the three kinds with `?`; the REPL prints the display
/// text and moves on to the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed phone or date string
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Unknown contact name or phone number
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Wrong argument count
    #[error("{0}")]
    Arity(#[from] ArityError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
