//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string is invalid.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {}. Use exactly 10 digits.", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date: {}. Use DD.MM.YYYY.", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
