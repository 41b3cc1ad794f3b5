//! Handler workflows behind the command verbs.
//!
//! Each handler checks its own arity, runs the book operation, and returns
//! the user-facing reply. Failures come back as `CommandError`; the loop
//! prints them and keeps going.

use crate::book::AddressBook;
use crate::error::{ArityError, CommandResult, NotFoundError};
use crate::models::ContactRecord;
use chrono::NaiveDate;
use tracing::debug;

const ADD_USAGE: &str = "add NAME PHONE [PHONE...]";
const CHANGE_USAGE: &str = "change NAME OLD_PHONE NEW_PHONE";
const PHONE_USAGE: &str = "phone NAME";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday NAME DD.MM.YYYY";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday NAME";

/// `add NAME PHONE [PHONE...]` — create the record if the name is new,
/// then append every phone in order.
///
/// Phones are added one by one, so the ones before a malformed argument
/// stick even when the command as a whole reports the validation error.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, phones @ ..] = args else {
        return Err(ArityError::new(ADD_USAGE).into());
    };
    if phones.is_empty() {
        return Err(ArityError::new(ADD_USAGE).into());
    }

    let created = book.find(name).is_none();
    if created {
        debug!(name = name.as_str(), "creating new record");
        book.add_record(ContactRecord::new(name.as_str()));
    }

    if let Some(record) = book.find_mut(name) {
        for phone in phones {
            record.add_phone(phone)?;
        }
    }

    Ok(if created {
        "Contact added.".to_string()
    } else {
        "Contact updated.".to_string()
    })
}

/// `change NAME OLD_PHONE NEW_PHONE` — replace one phone on an existing
/// record.
pub fn change_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(ArityError::new(CHANGE_USAGE).into());
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `phone NAME` — render one record.
pub fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name] = args else {
        return Err(ArityError::new(PHONE_USAGE).into());
    };

    let record = book
        .find(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;

    Ok(record.to_string())
}

/// `all` — every record on its own line, in insertion order.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }

    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday NAME DD.MM.YYYY` — set (or overwrite) a birthday on an
/// existing record.
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(ArityError::new(ADD_BIRTHDAY_USAGE).into());
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;
    record.set_birthday(date)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday NAME` — report one record's birthday.
pub fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name] = args else {
        return Err(ArityError::new(SHOW_BIRTHDAY_USAGE).into());
    };

    let record = book
        .find(name)
        .ok_or_else(|| NotFoundError::Contact(name.clone()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => "No birthday set for this contact.".to_string(),
    })
}

/// `birthdays` — the upcoming-birthdays report for the week starting at
/// `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    debug!(count = upcoming.len(), "upcoming birthdays computed");

    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    let mut output = String::from("Birthdays in the next week:");
    for entry in &upcoming {
        output.push('\n');
        output.push_str(&entry.to_string());
    }
    output
}
