//! Registration form rendering (class picker, details card, rounds)

use super::field_renderer::field_line;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw the class selector as `◂ Class 3 ▸`
pub fn draw_class_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.focus == Focus::ClassPicker;
    let label = state.catalog.label_at(state.picker_index);

    let value_style = if state.form.is_class_selected() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let arrow_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◂ ", arrow_style),
        Span::styled(label.to_string(), value_style),
        Span::styled(" ▸", arrow_style),
    ]);

    let block = Block::default()
        .title(" Select Academic Class ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Draw the registration details card for the selected class
pub fn draw_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(class) = state.selected_class() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} - {}", class.name, state.form.program_name()),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total Students: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.form.student_count().to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Registration Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Build the rounds listing, returning the lines and the focused line index
fn round_lines(state: &AppState) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut focused_line = None;
    let mut field_index = 0;

    for (round, slots) in state.form.group_fields_by_round() {
        let students = if slots.len() == 1 {
            "1 Student".to_string()
        } else {
            format!("{} Students", slots.len())
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" ({round}) "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" Round {round} - {students}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));

        for slot in slots {
            let is_active = state.focus == Focus::Field(field_index);
            if is_active {
                focused_line = Some(lines.len());
            }
            let value = state.form.value(&slot.value_key()).unwrap_or_default();
            lines.push(field_line(&slot.label(), value, is_active));
            field_index += 1;
        }

        lines.push(Line::from(""));
    }

    (lines, focused_line)
}

/// Scroll offset keeping `focused_line` inside a window of `height` rows
fn scroll_offset(focused_line: Option<usize>, height: usize) -> u16 {
    match focused_line {
        Some(line) if height > 0 && line >= height => (line + 1 - height) as u16,
        _ => 0,
    }
}

/// Draw the student fields grouped by round
pub fn draw_rounds(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = matches!(state.focus, Focus::Field(_));
    let block = Block::default()
        .title(" Student Details by Round ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if !state.form.is_class_selected() {
        let hint = Paragraph::new("Choose a class to enter student names.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner_height = block.inner(area).height as usize;
    let (lines, focused_line) = round_lines(state);
    let offset = scroll_offset(focused_line, inner_height);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)).block(block), area);
}
