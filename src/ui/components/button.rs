//! Button component for TUI

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Frames of the submitting indicator
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Label of the submit button for the current state
pub fn submit_button_label(state: &AppState) -> String {
    if state.submit.is_submitting() {
        let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
        format!("{spinner} Submitting...")
    } else {
        "➤ Submit Registration".to_string()
    }
}

/// Render the submit button, dimmed while disabled
pub fn render_submit_button(frame: &mut Frame, area: Rect, state: &AppState, is_selected: bool) {
    render_button(
        frame,
        area,
        &submit_button_label(state),
        is_selected,
        state.can_submit(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_when_idle() {
        let state = AppState::default();
        assert_eq!(submit_button_label(&state), "➤ Submit Registration");
    }

    #[test]
    fn test_label_while_submitting() {
        let mut state = AppState::default();
        state.submit.begin(true).unwrap();
        state.spinner_frame = 11;
        assert_eq!(submit_button_label(&state), "⠙ Submitting...");
    }
}
