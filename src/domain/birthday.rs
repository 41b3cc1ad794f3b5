//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one and only textual date format the book accepts and emits.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, parsed from `DD.MM.YYYY`.
///
/// The date is stored as a real calendar date rather than text, so the
/// upcoming-birthday arithmetic is exact. Formatting goes back through
/// the same `DD.MM.YYYY` pattern.
///
/// # Example
///
/// ```
/// use rolodex::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("24.08.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on wrong separators,
    /// out-of-range day or month, non-numeric fields, or trailing input.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BirthdayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
