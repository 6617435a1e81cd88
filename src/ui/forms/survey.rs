//! Survey form rendering (Level 3)

use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the Level 3 survey form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Survey(form) = &app.state.form else {
        return;
    };

    let title = match form.selected_topic() {
        Some(topic) => format!(" Survey · {} ", topic.label()),
        None => " Survey ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    super::draw_form_body(frame, inner, app, form, &form.errors, form.selected_button);
}
