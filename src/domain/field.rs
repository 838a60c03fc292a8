//! The validation contract shared by every record field.

use super::errors::ValidationError;
use std::fmt;

/// A validated value owned by a record.
///
/// Implementors keep their representation private so that `parse` is the
/// only way to obtain an instance.
pub trait Field: Sized + fmt::Display {
    /// The stored form of the value once validated.
    type Value: ?Sized;

    /// Validate `raw` and build the field from it.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when `raw` violates the field's rule.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The currently stored value.
    fn value(&self) -> &Self::Value;

    /// Replace the stored value with `raw`.
    ///
    /// On failure the previous value is left untouched.
    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
