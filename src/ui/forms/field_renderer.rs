//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its inline validation message, if any
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(
            Line::from(format!(" {message} ")).style(Style::default().fg(Color::Red)),
        );
    }

    let content = match &field.value {
        FieldValue::Text(_) => text_content(field, is_active),
        FieldValue::Choice { options, selected } => choice_content(*options, *selected, is_active),
        FieldValue::MultiChoice {
            options,
            selected,
            cursor,
        } => multi_choice_content(*options, selected, *cursor, is_active),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_content(field: &FormField, is_active: bool) -> Paragraph<'static> {
    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };

    // Placeholder when empty and not being edited
    if value.is_empty() && !is_active {
        return Paragraph::new(Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    if field.is_multiline {
        let mut lines: Vec<Line> = value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}

fn choice_content(
    options: &'static [&'static str],
    selected: Option<usize>,
    is_active: bool,
) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "◉" } else { "○" };
        let style = if is_selected && is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        if i + 1 < options.len() {
            spans.push(Span::raw("   "));
        }
    }
    Paragraph::new(Line::from(spans))
}

fn multi_choice_content(
    options: &'static [&'static str],
    selected: &[usize],
    cursor: usize,
    is_active: bool,
) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let is_checked = selected.contains(&i);
        let marker = if is_checked { "[x]" } else { "[ ]" };
        let style = if is_active && i == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_checked {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker} {option}"), style));
        if i + 1 < options.len() {
            spans.push(Span::raw("  "));
        }
    }
    Paragraph::new(Line::from(spans))
}
