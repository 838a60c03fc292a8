//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// Each variant carries the raw input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: '{}'", phone),
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Invalid birthday format. Use YYYY-MM-DD (got '{}')",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
