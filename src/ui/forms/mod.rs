//! Form rendering module
//!
//! This module contains UI components for rendering the registration form:
//! - `field_renderer`: Field rendering utilities
//! - `registration_form`: Class picker, details card and student rounds

mod field_renderer;
mod registration_form;

pub use registration_form::{draw_class_picker, draw_details, draw_rounds};
