//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// EPP-style phone number: `+CCC.NNNNNNNNNN` with an optional `x<extension>`.
static EPP_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(?P<country>[0-9]{1,3})\.(?P<subscriber>[0-9]{4,14})(?:x(?P<extension>.+))?$")
        .expect("Failed to compile EPP phone number regex")
});

/// A type-safe wrapper for phone numbers in EPP format.
///
/// The text is validated once at construction time, so every
/// `PhoneNumber` in the system is known to be well-formed.
///
/// # Format
///
/// - optional leading `+`
/// - 1 to 3 digit country code
/// - a literal `.`
/// - 4 to 14 digit subscriber number
/// - optionally `x` followed by an extension of any length
///
/// # Example
///
/// ```
/// use phonebook_crawler::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+36.201234567").unwrap();
/// assert_eq!(phone.as_str(), "+36.201234567");
/// assert_eq!(phone.country_code(), "36");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the text is not a full match
    /// of the EPP format.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !EPP_PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Country code digits, without the leading `+`.
    pub fn country_code(&self) -> &str {
        self.part("country").unwrap_or_default()
    }

    /// Subscriber number digits.
    pub fn subscriber_number(&self) -> &str {
        self.part("subscriber").unwrap_or_default()
    }

    /// Extension text after the `x`, if present.
    pub fn extension(&self) -> Option<&str> {
        self.part("extension")
    }

    // Re-runs the regex on each call; only the validated text is stored.
    fn part(&self, group: &str) -> Option<&str> {
        EPP_PHONE_REGEX
            .captures(&self.0)
            .and_then(|caps| caps.name(group))
            .map(|m| m.as_str())
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
