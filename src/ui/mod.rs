//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Focus;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let outcome = state.submit.outcome();
    let area = frame.area();

    // The notice belongs to the current attempt; an outcome to the last one
    let message = state
        .notice
        .as_deref()
        .or_else(|| outcome.map(|o| o.message.as_str()));
    let message_height = message.map_or(0, |m| components::message_height(m, area.width));

    let screen = layout::create_layout(area, state.form.is_class_selected(), message_height);

    layout::draw_header(frame, screen.header);
    forms::draw_class_picker(frame, screen.picker, state);
    forms::draw_details(frame, screen.details, state);
    forms::draw_rounds(frame, screen.rounds, state);
    components::render_submit_button(
        frame,
        screen.button,
        state,
        state.focus == Focus::SubmitButton,
    );

    if let Some(notice) = &state.notice {
        components::render_notice(frame, screen.message, notice);
    } else if let Some(outcome) = outcome {
        components::render_outcome(frame, screen.message, outcome);
    }

    layout::draw_status_bar(frame, screen.status_bar, app);
}
