//! Job application form rendering (Level 2)

use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the Level 2 job application form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::JobApplication(form) = &app.state.form else {
        return;
    };

    // Title reflects the chosen position once one is selected
    let title = match form.selected_position() {
        Some(position) => format!(" Job Application · {} ", position.label()),
        None => " Job Application ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    super::draw_form_body(frame, inner, app, form, &form.errors, form.selected_button);
}
