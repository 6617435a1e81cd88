//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: header on top, content below, bottom line
/// reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the screen title and its route path
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view;
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                view.title(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", view.path()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            view.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, area);
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(&app.state.current_view)),
        Style::default().fg(Color::Gray),
    )];

    // Clipboard feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.width - hint_width,
            y: status_area.y,
            width: hint_width,
            height: 1,
        };
        let hint = Paragraph::new(quit_hint)
            .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(hint, hint_area);
    }
}

fn get_view_hints(view: &View) -> &'static str {
    if view.is_form_view() {
        "Tab: next field  Shift+Tab: previous  Esc: back"
    } else {
        "↑↓: select  Enter: open  1-3: jump  q: quit"
    }
}
