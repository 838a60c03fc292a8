//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for input, display and storage.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// chrono's `%m`/`%d` also accept single digits, so the exact shape is
/// checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid birthday regex"));

/// A birthday parsed from a strict `YYYY-MM-DD` string.
///
/// # Example
///
/// ```
/// use address_book::domain::{Birthday, Field};
/// use chrono::Datelike;
///
/// let birthday = Birthday::parse("1990-05-20").unwrap();
/// assert_eq!(birthday.date().month(), 5);
/// assert_eq!(birthday.to_string(), "1990-05-20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a real
    /// calendar date in `YYYY-MM-DD` form.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        if !BIRTHDAY_SHAPE.is_match(raw) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// The birth date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 falls on March 1 in non-leap years. Returns `None` only
    /// when `year` is outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
