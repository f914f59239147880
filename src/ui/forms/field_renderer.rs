//! Field rendering utilities for forms

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width reserved for field labels so inputs line up
const LABEL_WIDTH: usize = 16;

/// Build a single-line text input: label, value (or placeholder), cursor
pub fn field_line(label: &str, value: &str, is_active: bool) -> Line<'static> {
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let marker = if is_active { "▸ " } else { "  " };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        Span::raw(" "),
    ];

    if value.is_empty() && !is_active {
        spans.push(Span::styled(
            "Enter name",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let value_style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default()
        };
        spans.push(Span::styled(value.to_string(), value_style));
    }

    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    Line::from(spans)
}
