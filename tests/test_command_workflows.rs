//! Integration tests for the command workflows: the merge-on-re-add
//! behavior, arity checking, not-found replies, and empty-state text.

use chrono::NaiveDate;
use rolodex::commands::handlers;
use rolodex::AddressBook;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_re_adding_a_name_merges_into_one_record() {
    let mut book = AddressBook::new();

    handlers::add_contact(&mut book, &args(&["Anna", "0501234567"])).unwrap();
    handlers::add_contact(&mut book, &args(&["Anna", "0937654321", "0501234567"])).unwrap();

    assert_eq!(book.len(), 1);
    let phones: Vec<&str> = book
        .find("Anna")
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    // union of both calls' phones, duplicates permitted
    assert_eq!(phones, vec!["0501234567", "0937654321", "0501234567"]);
}

#[test]
fn test_arity_errors_carry_the_usage_line() {
    let mut book = AddressBook::new();

    let err = handlers::add_contact(&mut book, &args(&["Anna"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incomplete command. Usage: add NAME PHONE [PHONE...]"
    );

    let err = handlers::change_contact(&mut book, &args(&["Anna"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incomplete command. Usage: change NAME OLD_PHONE NEW_PHONE"
    );

    let err = handlers::show_birthday(&book, &args(&[])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incomplete command. Usage: show-birthday NAME"
    );
}

#[test]
fn test_unknown_name_replies() {
    let mut book = AddressBook::new();

    for err in [
        handlers::change_contact(&mut book, &args(&["Ghost", "0501234567", "0937654321"]))
            .unwrap_err(),
        handlers::show_phone(&book, &args(&["Ghost"])).unwrap_err(),
        handlers::add_birthday(&mut book, &args(&["Ghost", "01.01.2000"])).unwrap_err(),
        handlers::show_birthday(&book, &args(&["Ghost"])).unwrap_err(),
    ] {
        assert_eq!(err.to_string(), "Contact not found: Ghost");
    }
}

#[test]
fn test_empty_states() {
    let book = AddressBook::new();
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    assert_eq!(handlers::show_all(&book), "Address book is empty.");
    assert_eq!(handlers::birthdays(&book, today), "No upcoming birthdays.");
}

#[test]
fn test_full_contact_lifecycle() {
    let mut book = AddressBook::new();
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

    handlers::add_contact(&mut book, &args(&["Anna", "0501234567"])).unwrap();
    handlers::add_birthday(&mut book, &args(&["Anna", "12.03.1991"])).unwrap();
    handlers::change_contact(&mut book, &args(&["Anna", "0501234567", "0937654321"])).unwrap();

    assert_eq!(
        handlers::show_phone(&book, &args(&["Anna"])).unwrap(),
        "Contact name: Anna, phones: 0937654321, birthday: 12.03.1991"
    );
    assert_eq!(
        handlers::show_birthday(&book, &args(&["Anna"])).unwrap(),
        "Anna's birthday: 12.03.1991"
    );
    assert_eq!(
        handlers::birthdays(&book, today),
        "Birthdays in the next week:\nAnna: 12.03.2024"
    );

    assert!(book.delete("Anna"));
    assert_eq!(handlers::show_all(&book), "Address book is empty.");
}

#[test]
fn test_listing_keeps_insertion_order_after_updates() {
    let mut book = AddressBook::new();

    handlers::add_contact(&mut book, &args(&["Clara", "1111111111"])).unwrap();
    handlers::add_contact(&mut book, &args(&["Anna", "2222222222"])).unwrap();
    handlers::add_contact(&mut book, &args(&["Clara", "3333333333"])).unwrap();

    assert_eq!(
        handlers::show_all(&book),
        "Contact name: Clara, phones: 1111111111; 3333333333\n\
         Contact name: Anna, phones: 2222222222"
    );
}
