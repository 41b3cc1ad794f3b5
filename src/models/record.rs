//! Contact record: one person's name, phones, and optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandResult, NotFoundError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact held by the address book.
///
/// The record owns an ordered sequence of phone numbers and at most one
/// birthday. Phones are appended in the order they are added; the same
/// number may appear more than once (no dedup invariant). The book that
/// holds the record is its exclusive owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create an empty record for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone sequence.
    ///
    /// Repeated identical numbers accumulate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not a 10-digit string.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// First phone entry whose value equals `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Remove the first phone entry equal to `raw`.
    ///
    /// Returns whether a removal occurred.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|phone| phone.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the phone entry equal to `old` with a freshly validated `new`.
    ///
    /// The replacement is appended at the end of the sequence, not at the
    /// old entry's position.
    ///
    /// # Errors
    ///
    /// `NotFoundError::Phone` if `old` is not present (checked before `new`
    /// is validated, so the sequence stays untouched), or
    /// `ValidationError::InvalidPhone` if `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| NotFoundError::Phone(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Validate `raw` as `DD.MM.YYYY` and set it as the birthday.
    ///
    /// Overwrites any birthday set earlier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on a parse mismatch.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = BirthdayDate::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Anna");
        assert_eq!(record.name().as_str(), "Anna");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_and_find_phone() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0937654321").unwrap();

        assert_eq!(record.phones().len(), 2);
        assert_eq!(
            record.find_phone("0937654321").map(PhoneNumber::as_str),
            Some("0937654321")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = ContactRecord::new("Anna");
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_duplicate_phones_accumulate() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();

        assert!(record.remove_phone("0501234567"));
        assert!(record.phones().is_empty());
        assert!(!record.remove_phone("0501234567"));
    }

    #[test]
    fn test_remove_phone_takes_first_match_only() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();

        assert!(record.remove_phone("0501234567"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_moves_to_end() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(phones, vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_unknown_old_leaves_sequence_unchanged() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("9999999999", "3333333333").unwrap_err();
        assert_eq!(
            err,
            NotFoundError::Phone("9999999999".to_string()).into()
        );

        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(phones, vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_sequence_unchanged() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("1111111111").unwrap();

        assert!(record.edit_phone("1111111111", "not-a-phone").is_err());

        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        assert_eq!(phones, vec!["1111111111"]);
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = ContactRecord::new("Anna");
        record.set_birthday("01.01.1990").unwrap();
        record.set_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_set_birthday_invalid() {
        let mut record = ContactRecord::new("Anna");
        assert!(record.set_birthday("1990-01-01").is_err());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0937654321").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 0501234567; 0937654321"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.set_birthday("24.08.1991").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 0501234567, birthday: 24.08.1991"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = ContactRecord::new("Anna");
        record.add_phone("0501234567").unwrap();
        record.set_birthday("24.08.1991").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
