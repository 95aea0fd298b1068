//! DirectoryEntry value object.

use super::phone::PhoneNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single phone book record: a name and, if known, its phone number.
///
/// The name is stored as given. Names are not required to be unique
/// within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryEntry {
    name: String,

    #[serde(default)]
    phone_number: Option<PhoneNumber>,
}

impl DirectoryEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, phone_number: Option<PhoneNumber>) -> Self {
        Self {
            name: name.into(),
            phone_number,
        }
    }

    /// Create an entry with a known phone number.
    pub fn with_number(name: impl Into<String>, phone_number: PhoneNumber) -> Self {
        Self::new(name, Some(phone_number))
    }

    /// Create an entry whose phone number is unknown.
    pub fn without_number(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phone_number {
            Some(phone) => write!(f, "{}: {}", self.name, phone),
            None => write!(f, "{}: <no phone number>", self.name),
        }
    }
}
