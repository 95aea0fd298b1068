//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not match the EPP format.
    ///
    /// Carries the rejected input for diagnostics; the display message stays fixed.
    InvalidPhone(String),
}

impl ValidationError {
    /// The rejected input text.
    pub fn rejected_input(&self) -> &str {
        match self {
            Self::InvalidPhone(phone) => phone,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Invalid phone number"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_message_is_fixed() {
        let err = ValidationError::InvalidPhone("12345".to_string());
        assert_eq!(err.to_string(), "Invalid phone number");
        assert_eq!(err.rejected_input(), "12345");
    }
}
