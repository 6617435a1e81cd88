//! Form state management and the form trait

use super::field::FormField;
use super::{JobApplicationForm, RegistrationForm, SurveyForm};
use crate::state::submission::Submission;

/// Trait for common form operations
///
/// Fields live at fixed canonical indices; `visible_indices` reports which
/// of them are currently shown (conditional fields come and go with other
/// answers) and always ends with the buttons-row sentinel.
pub trait Form {
    /// Canonical indices of the currently visible fields, buttons row last
    fn visible_indices(&self) -> Vec<usize>;
    /// Sentinel index of the Submit/Reset buttons row
    fn buttons_row(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    fn next_field(&mut self) {
        let indices = self.visible_indices();
        let current = self.active_field();
        let pos = indices.iter().position(|&i| i == current).unwrap_or(0);
        self.set_active_field(indices[(pos + 1) % indices.len()]);
    }

    fn prev_field(&mut self) {
        let indices = self.visible_indices();
        let current = self.active_field();
        let pos = indices.iter().position(|&i| i == current).unwrap_or(0);
        let prev = if pos == 0 { indices.len() - 1 } else { pos - 1 };
        self.set_active_field(indices[prev]);
    }

    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.buttons_row()
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        if index == self.buttons_row() {
            return None;
        }
        self.get_field_mut(index)
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Registration(RegistrationForm),
    JobApplication(JobApplicationForm),
    Survey(SurveyForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Registration(f) => f.next_field(),
            FormState::JobApplication(f) => f.next_field(),
            FormState::Survey(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Registration(f) => f.prev_field(),
            FormState::JobApplication(f) => f.prev_field(),
            FormState::Survey(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::Registration(f) => f.get_active_field_mut(),
            FormState::JobApplication(f) => f.get_active_field_mut(),
            FormState::Survey(f) => f.get_active_field_mut(),
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        match self {
            FormState::None => false,
            FormState::Registration(f) => f.is_buttons_row_active(),
            FormState::JobApplication(f) => f.is_buttons_row_active(),
            FormState::Survey(f) => f.is_buttons_row_active(),
        }
    }

    pub fn selected_button(&self) -> usize {
        match self {
            FormState::None => 0,
            FormState::Registration(f) => f.selected_button,
            FormState::JobApplication(f) => f.selected_button,
            FormState::Survey(f) => f.selected_button,
        }
    }

    pub fn next_button(&mut self) {
        match self {
            FormState::None => {}
            FormState::Registration(f) => f.next_button(),
            FormState::JobApplication(f) => f.next_button(),
            FormState::Survey(f) => f.next_button(),
        }
    }

    pub fn prev_button(&mut self) {
        // Two buttons, so forward and backward are the same toggle
        self.next_button();
    }

    pub fn reset(&mut self) {
        match self {
            FormState::None => {}
            FormState::Registration(f) => *f = RegistrationForm::new(),
            FormState::JobApplication(f) => *f = JobApplicationForm::new(),
            FormState::Survey(f) => *f = SurveyForm::new(),
        }
    }

    /// Validate and snapshot the form; on failure the form keeps the
    /// field -> message map for inline rendering
    pub fn submit(&mut self) -> Option<Submission> {
        match self {
            FormState::None => None,
            FormState::Registration(f) => f.submit(),
            FormState::JobApplication(f) => f.submit(),
            FormState::Survey(f) => f.submit(),
        }
    }

    /// Drop the stored error for the active field (called when it is edited)
    pub fn clear_active_error(&mut self) {
        let name = match self {
            FormState::None => return,
            FormState::Registration(f) => f
                .get_field(f.active_field())
                .map(|field| field.name.clone()),
            FormState::JobApplication(f) => f
                .get_field(f.active_field())
                .map(|field| field.name.clone()),
            FormState::Survey(f) => f
                .get_field(f.active_field())
                .map(|field| field.name.clone()),
        };
        if let Some(name) = name {
            match self {
                FormState::None => {}
                FormState::Registration(f) => {
                    f.errors.remove(&name);
                }
                FormState::JobApplication(f) => {
                    f.errors.remove(&name);
                }
                FormState::Survey(f) => {
                    f.errors.remove(&name);
                }
            }
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self {
            FormState::None => false,
            FormState::Registration(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::JobApplication(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
            FormState::Survey(f) => f
                .get_field(f.active_field())
                .is_some_and(|f| f.is_multiline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state_enum {
        use super::*;

        #[test]
        fn test_default_is_none() {
            let state = FormState::default();
            assert!(matches!(state, FormState::None));
        }

        #[test]
        fn test_next_field_on_none_is_noop() {
            let mut state = FormState::None;
            state.next_field(); // Should not panic
        }

        #[test]
        fn test_prev_field_on_none_is_noop() {
            let mut state = FormState::None;
            state.prev_field(); // Should not panic
        }

        #[test]
        fn test_get_active_field_mut_none_returns_none() {
            let mut state = FormState::None;
            assert!(state.get_active_field_mut().is_none());
        }

        #[test]
        fn test_submit_on_none_returns_none() {
            let mut state = FormState::None;
            assert!(state.submit().is_none());
        }

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut state = FormState::Registration(RegistrationForm::new());
            if let FormState::Registration(ref f) = state {
                assert_eq!(f.active_field_index, 0);
            }
            state.next_field();
            if let FormState::Registration(ref f) = state {
                assert_eq!(f.active_field_index, 1);
            }
        }

        #[test]
        fn test_get_active_field_mut_returns_field() {
            let mut state = FormState::Registration(RegistrationForm::new());
            let field = state.get_active_field_mut();
            assert!(field.is_some());
            assert_eq!(field.unwrap().name, "name");
        }

        #[test]
        fn test_buttons_row_has_no_active_field() {
            let mut form = RegistrationForm::new();
            form.set_active_field(form.buttons_row());
            let mut state = FormState::Registration(form);
            assert!(state.is_buttons_row_active());
            assert!(state.get_active_field_mut().is_none());
        }

        #[test]
        fn test_reset_restores_pristine_form() {
            let mut form = RegistrationForm::new();
            form.name.push_char('x');
            form.next_field();
            let mut state = FormState::Registration(form);
            state.reset();
            if let FormState::Registration(ref f) = state {
                assert_eq!(f.name.as_text(), "");
                assert_eq!(f.active_field_index, 0);
            }
        }

        #[test]
        fn test_clear_active_error_removes_only_active() {
            let mut form = RegistrationForm::new();
            form.errors
                .insert("name".to_string(), "Name is required".to_string());
            form.errors
                .insert("email".to_string(), "Email is required".to_string());
            let mut state = FormState::Registration(form);
            state.clear_active_error();
            if let FormState::Registration(ref f) = state {
                assert!(!f.errors.contains_key("name"));
                assert!(f.errors.contains_key("email"));
            }
        }
    }
}
