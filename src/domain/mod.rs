//! Domain value objects and types.
//!
//! Every field a contact record holds is a value object that is validated
//! at construction time. None of them can be built without going through
//! their validating constructor, so an invalid value is never observable.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
