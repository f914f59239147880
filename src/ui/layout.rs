//! Layout components (header, screen sections, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Focus;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the registration screen, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub picker: Rect,
    pub details: Rect,
    pub rounds: Rect,
    pub button: Rect,
    pub message: Rect,
    pub status_bar: Rect,
}

/// Split the screen; optional sections collapse to zero height
pub fn create_layout(area: Rect, has_class: bool, message_height: u16) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Class picker
            Constraint::Length(if has_class { 4 } else { 0 }), // Details card
            Constraint::Min(0), // Rounds
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(message_height), // Status message
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        picker: chunks[1],
        details: chunks[2],
        rounds: chunks[3],
        button: chunks[4],
        message: chunks[5],
        status_bar: chunks[6],
    }
}

/// Draw the title block
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Student Registration",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enroll students into programs by class",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.state.focus {
        Focus::ClassPicker => "↑/↓:class  Tab:next",
        Focus::Field(_) => "type:name  Enter/Tab:next  Shift+Tab:prev",
        Focus::SubmitButton => "Enter:submit  Shift+Tab:prev",
    };

    let spans = vec![
        Span::styled(format!(" {hints}"), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(
            format!("{SUBMIT_SHORTCUT}:submit"),
            Style::default().fg(Color::Gray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc/^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
