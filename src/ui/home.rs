//! Home screen: pick a form level

use crate::app::App;
use crate::state::View;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Draw the level selection screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Center a fixed-width column
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(46),
            Constraint::Min(0),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0), // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(2),
            Constraint::Min(0), // Bottom padding (flex)
        ])
        .split(columns[1]);

    for (i, view) in View::LEVELS.iter().enumerate() {
        let label = format!("Level {} · {}", i + 1, view.title());
        render_button(
            frame,
            rows[i + 1],
            &label,
            app.state.home_selected == i,
            None,
        );
    }

    let footer = Paragraph::new(Line::from(
        "Each level adds rules on top of the previous one",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .centered();
    frame.render_widget(footer, rows[4]);
}
