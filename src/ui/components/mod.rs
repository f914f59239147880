//! Reusable UI components

mod button;
mod status_message;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use status_message::{message_height, render_notice, render_outcome};
