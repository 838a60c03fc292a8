//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Every field is validated on the way in, through the constructors,
/// mutators and deserialization alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order; duplicates are allowed.
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is given and
    /// is not a valid `YYYY-MM-DD` date.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Record;
    ///
    /// let mut alice = Record::new("Alice", Some("1990-05-20")).unwrap();
    /// alice.add_phone("0671234567").unwrap();
    /// assert_eq!(alice.to_string(), "Contact name: Alice, phones: 0671234567");
    /// ```
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> RecordResult<Self> {
        let birthday = birthday.map(Birthday::parse).transpose()?;
        Ok(Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        self.phones.push(Phone::parse(phone)?);
        Ok(())
    }

    /// Remove every phone number equal to `phone`.
    ///
    /// Returns how many entries were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone number equal to `old` with `new`.
    ///
    /// `old` is looked up before `new` is validated. The record is left
    /// unchanged on any error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::parse(new)?;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or replace the birthday. On failure the previous birthday is kept.
    pub fn set_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days from today (local time) until the next birthday.
    ///
    /// `None` when no birthday is set. Zero on the birthday itself.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    /// Case-insensitive substring match against the name and phone numbers.
    ///
    /// `query` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.name.as_str().to_lowercase().contains(query)
            || self
                .phones
                .iter()
                .any(|p| p.as_str().to_lowercase().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join(","))
    }
}
