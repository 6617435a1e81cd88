//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldValue, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Clipboard feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance starting at the given view
    pub fn new(config: TuiConfig, start_view: View) -> Self {
        let mut state = AppState::default();
        state.current_view = start_view;
        state.prepare_form(start_view);
        if let Some(pos) = View::LEVELS.iter().position(|v| *v == start_view) {
            state.home_selected = pos;
        }

        Self {
            state,
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle summary dialog (modal)
        if self.state.summary_open {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.summary_open = false,
                KeyCode::Char('c') => self.copy_submission(),
                _ => {}
            }
            return Ok(());
        }

        // Clear any clipboard feedback on key press
        self.copy_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::LevelOne | View::LevelTwo | View::LevelThree => self.handle_form_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.prepare_form(view);
    }

    /// Go back to the previous view, dropping the current form state
    pub fn go_back(&mut self) {
        let view = self.state.view_history.pop().unwrap_or(View::Home);
        self.state.current_view = view;
        self.state.prepare_form(view);
    }

    /// Handle keys on the home screen
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.home_selected == 0 {
                    self.state.home_selected = View::LEVELS.len() - 1;
                } else {
                    self.state.home_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.home_selected = (self.state.home_selected + 1) % View::LEVELS.len();
            }
            KeyCode::Enter => {
                self.navigate(View::LEVELS[self.state.home_selected]);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.state.home_selected = index;
                self.navigate(View::LEVELS[index]);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys on any of the form screens
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.prev_button();
                } else if let Some(field) = self.state.form.get_active_field_mut() {
                    field.prev_option();
                    self.state.form.clear_active_error();
                }
            }
            KeyCode::Right => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.next_button();
                } else if let Some(field) = self.state.form.get_active_field_mut() {
                    field.next_option();
                    self.state.form.clear_active_error();
                }
            }
            KeyCode::Enter => {
                if self.state.form.is_buttons_row_active() {
                    if self.state.form.selected_button() == 0 {
                        self.submit_form();
                    } else {
                        self.state.form.reset();
                    }
                } else if self.state.form.is_active_field_multiline() {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
                self.state.form.clear_active_error();
            }
            KeyCode::Char(c) => {
                if self.state.form.is_buttons_row_active() {
                    // Reopen the last summary from the buttons row
                    if c == 's' && self.state.last_submission.is_some() {
                        self.state.summary_open = true;
                    }
                } else if let Some(field) = self.state.form.get_active_field_mut() {
                    match &field.value {
                        FieldValue::MultiChoice { .. } if c == ' ' => field.toggle_option(),
                        FieldValue::Choice { .. } if c == ' ' => field.next_option(),
                        _ => field.push_char(c),
                    }
                    self.state.form.clear_active_error();
                }
            }
            _ => {}
        }
    }

    /// Validate the current form; open the summary dialog on success
    fn submit_form(&mut self) {
        if let Some(submission) = self.state.form.submit() {
            tracing::info!(kind = submission.title(), "form submitted");
            self.state.last_submission = Some(submission);
            self.state.summary_open = true;
        } else {
            tracing::debug!("form submit rejected by validation");
        }
    }

    /// Copy the last submission to the system clipboard as JSON
    fn copy_submission(&mut self) {
        let Some(submission) = &self.state.last_submission else {
            return;
        };
        match submission.to_json() {
            Ok(json) => {
                let copied = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(json));
                match copied {
                    Ok(()) => {
                        self.copy_message = Some("Copied submission to clipboard".to_string());
                    }
                    Err(err) => self.push_error(format!("Failed to copy: {err}")),
                }
            }
            Err(err) => self.push_error(format!("Failed to serialize submission: {err}")),
        }
    }
}
