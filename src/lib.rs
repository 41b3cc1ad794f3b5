//! Rolodex - a command-line contact book with birthday reminders.
//!
//! The book stores names, validated 10-digit phone numbers, and optional
//! `DD.MM.YYYY` birthdays in memory, and answers queries such as "who has
//! a birthday in the next 7 days" with weekend roll-forward. State lives
//! only for the process lifetime.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone number, birthday)
//! - **models**: the contact record held by the book
//! - **book**: the insertion-ordered record store and the birthday query
//! - **error**: custom error types for precise error handling
//! - **commands**: line parsing and the handler workflows
//! - **repl**: the interactive read-eval-print loop
//! - **config**: configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use error::{ArityError, CommandError, ConfigError, NotFoundError};
pub use models::ContactRecord;
