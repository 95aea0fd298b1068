//! Test fixtures and sample data.
//!
//! Mirrors the two-person phone book used across the crawler tests.

#![allow(dead_code)]

use phonebook_crawler::{DirectoryEntry, PhoneNumber};

pub const NAME_1: &str = "Person_1";
pub const NAME_2: &str = "Person_2";
pub const NAME_3: &str = "Person_3";
pub const INVALID_NAME: &str = "InvalidPerson";

pub const PHONE_1: &str = "+36.201234567";
pub const PHONE_2: &str = "+36.302345678";
pub const PHONE_3: &str = "+36.403456789";

/// Build a validated phone number.
pub fn phone(text: &str) -> PhoneNumber {
    PhoneNumber::new(text).expect("fixture phone numbers are valid")
}

/// Build an entry with a known number.
pub fn entry(name: &str, number: &str) -> DirectoryEntry {
    DirectoryEntry::with_number(name, phone(number))
}

pub fn entry_1() -> DirectoryEntry {
    entry(NAME_1, PHONE_1)
}

pub fn entry_2() -> DirectoryEntry {
    entry(NAME_2, PHONE_2)
}

/// Entry handed out by caller-supplied fallbacks.
pub fn fallback_entry() -> DirectoryEntry {
    entry(NAME_3, PHONE_3)
}

/// The standard two-entry phone book.
pub fn sample_entries() -> Vec<DirectoryEntry> {
    vec![entry_1(), entry_2()]
}
