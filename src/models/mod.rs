//! Data structures held by the address book.

pub mod record;

pub use record::ContactRecord;
