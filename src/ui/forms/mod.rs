//! Form rendering (Level 1 to Level 3)

mod application;
mod field_renderer;
mod registration;
mod survey;

pub use application::draw as draw_application;
pub use registration::draw as draw_registration;
pub use survey::draw as draw_survey;

use crate::app::App;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::BTreeMap;

/// Rows for a regular field block (border + content + border)
const FIELD_HEIGHT: u16 = 3;
/// Rows for a multiline field block
const MULTILINE_HEIGHT: u16 = 5;

/// Draw the visible fields, buttons row, and help line of a form
fn draw_form_body(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    form: &dyn Form,
    errors: &BTreeMap<String, String>,
    selected_button: usize,
) {
    let show_hints = app.config.hints_enabled();
    let buttons_row = form.buttons_row();
    let field_indices: Vec<usize> = form
        .visible_indices()
        .into_iter()
        .filter(|&i| i != buttons_row)
        .collect();

    let mut constraints: Vec<Constraint> = field_indices
        .iter()
        .map(|&i| {
            let multiline = form.get_field(i).is_some_and(|f| f.is_multiline);
            if multiline {
                Constraint::Length(MULTILINE_HEIGHT)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if show_hints {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, &index) in chunks.iter().zip(field_indices.iter()) {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                *chunk,
                field,
                form.active_field() == index,
                errors.get(&field.name).map(String::as_str),
            );
        }
    }

    let buttons_area = chunks[field_indices.len()];
    draw_buttons_row(
        frame,
        buttons_area,
        form.is_buttons_row_active(),
        selected_button,
    );

    if show_hints {
        let help_area = chunks[field_indices.len() + 1];
        draw_help_line(frame, help_area, app.state.last_submission.is_some());
    }
}

/// Draw the Submit/Reset buttons side by side
fn draw_buttons_row(frame: &mut Frame, area: Rect, is_active: bool, selected_button: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Submit",
        is_active && selected_button == 0,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        "Reset",
        is_active && selected_button == 1,
        Some(Color::Yellow),
    );
}

fn draw_help_line(frame: &mut Frame, area: Rect, has_last_submission: bool) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Space/←→", Style::default().fg(Color::Cyan)),
        Span::raw(": choose  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ];
    if has_last_submission {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("s", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": last summary"));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
