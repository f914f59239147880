//! Inline status message below the submit button

use crate::state::{OutcomeKind, SubmissionOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Columns taken by the icon and its trailing space
const ICON_WIDTH: usize = 2;

/// Height of the bordered message box needed to show `message` in full
/// when word-wrapped to `width` columns (borders included)
pub fn message_height(message: &str, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2)).max(1);

    let mut lines = 1;
    let mut column = ICON_WIDTH;
    for word in message.split_whitespace() {
        let len = word.chars().count();
        if column > 0 && column + 1 + len <= inner {
            column += 1 + len;
        } else if column == 0 && len <= inner {
            column = len;
        } else {
            // Words longer than a line are broken across several
            lines += 1 + len.saturating_sub(1) / inner;
            column = len % inner;
        }
    }

    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

/// Icon, title and color for an outcome
fn outcome_style(kind: OutcomeKind) -> (&'static str, Color) {
    match kind {
        OutcomeKind::Success => ("✔", Color::Green),
        OutcomeKind::Error => ("✖", Color::Red),
    }
}

/// Render a submission outcome (green success, red error)
pub fn render_outcome(frame: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let (icon, color) = outcome_style(outcome.kind);
    render_message(frame, area, icon, &outcome.message, color);
}

/// Render a presentation-layer notice such as missing required fields
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &str) {
    render_message(frame, area, "!", notice, Color::Yellow);
}

fn render_message(frame: &mut Frame, area: Rect, icon: &str, message: &str, color: Color) {
    let line = Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(color)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
