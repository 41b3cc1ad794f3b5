//! The address book: an insertion-ordered store of contact records.
//!
//! Records are keyed by name. Iteration and the `all` listing follow
//! insertion order, and re-adding an existing name keeps the record's
//! original position, so output stays deterministic across a session.

use crate::domain::ContactName;
use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Length of the forward-looking birthday window, today inclusive.
const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// One row of the upcoming-birthdays report.
///
/// `observed` is the birthday moved into the current or next year and
/// rolled off weekends; it is the date the congratulation should happen,
/// not the calendar birthday itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    name: ContactName,
    #[serde(serialize_with = "serialize_observed")]
    observed: NaiveDate,
}

// Reports carry dates in the same DD.MM.YYYY form the user typed them in.
fn serialize_observed<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(crate::domain::DATE_FORMAT)
        .to_string()
        .serialize(serializer)
}

impl UpcomingBirthday {
    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The observed (rolled) congratulation date.
    pub fn observed(&self) -> NaiveDate {
        self.observed
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.observed.format(crate::domain::DATE_FORMAT)
        )
    }
}

/// The keyed store of all contact records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record under its name key.
    ///
    /// Last write wins. Overwriting keeps the record's original position;
    /// a new name goes to the end. The add workflow prefers merging into
    /// an existing record over calling this — the raw upsert is what the
    /// book itself guarantees.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Look up a record by name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name).map(|index| &mut self.records[index])
    }

    /// Remove the record under `name`.
    ///
    /// Returns whether a record was present. The remaining records keep
    /// their relative order.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    /// Contacts whose birthday falls within the next week, with the
    /// congratulation date rolled off weekends.
    ///
    /// For every record with a birthday:
    ///
    /// 1. move the birthday into `today`'s year;
    /// 2. if that date is already past, move it into the next year instead
    ///    (one wrap, never further);
    /// 3. keep it only when it lands within `[0, 7)` days of `today`;
    /// 4. roll a Saturday forward by two days and a Sunday by one, both
    ///    landing on Monday. The rolled date is not re-checked against the
    ///    window: a Saturday at the window's edge reports a Monday outside
    ///    the original week.
    ///
    /// Results keep the book's insertion order; there is no date sort.
    /// A Feb 29 birthday is skipped in years where the substituted year
    /// has no Feb 29.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let this_year = match birthday.date().with_year(today.year()) {
                Some(date) => date,
                None => {
                    warn!(
                        name = record.name().as_str(),
                        "skipping Feb 29 birthday with no counterpart this year"
                    );
                    continue;
                }
            };

            let mut observed = if this_year < today {
                match birthday.date().with_year(today.year() + 1) {
                    Some(date) => date,
                    None => {
                        warn!(
                            name = record.name().as_str(),
                            "skipping Feb 29 birthday with no counterpart next year"
                        );
                        continue;
                    }
                }
            } else {
                this_year
            };

            let delta_days = (observed - today).num_days();
            if !(0..BIRTHDAY_WINDOW_DAYS).contains(&delta_days) {
                continue;
            }

            observed = match observed.weekday() {
                Weekday::Sat => observed + Duration::days(2),
                Weekday::Sun => observed + Duration::days(1),
                _ => observed,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().clone(),
                observed,
            });
        }

        upcoming
    }
}
