//! Form domain layer
//!
//! Student slots and the registration form aggregate. Nothing here knows about
//! rendering or the network.

mod field;
mod registration_form;

pub use field::FieldSlot;
pub use registration_form::{FormValues, RegistrationForm, DEFAULT_PROGRAM_NAME};
