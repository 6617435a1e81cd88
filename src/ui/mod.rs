//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::LevelOne => forms::draw_registration(frame, main_area, app),
        View::LevelTwo => forms::draw_application(frame, main_area, app),
        View::LevelThree => forms::draw_survey(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal overlays render last, on top of everything
    if app.state.summary_open {
        if let Some(submission) = &app.state.last_submission {
            components::dialog::render_summary_dialog(frame, submission);
        }
    }

    if let Some(message) = app.state.current_error() {
        components::dialog::render_error_dialog(frame, message);
    }
}
