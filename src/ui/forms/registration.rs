//! Event registration form rendering (Level 1)

use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the Level 1 registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Registration(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Event Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    super::draw_form_body(frame, inner, app, form, &form.errors, form.selected_button);
}
