//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name.
///
/// Names are taken as given: the book keys records by whatever string the
/// user typed, so construction never fails and no format is enforced.
/// Wrapping the string anyway keeps names from being confused with phone
/// numbers or dates at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
