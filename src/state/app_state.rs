//! Application state definitions

use super::forms::{FormState, JobApplicationForm, RegistrationForm, SurveyForm};
use super::submission::Submission;

/// Current view in the application
///
/// Each view corresponds to one route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    LevelOne,
    LevelTwo,
    LevelThree,
}

impl View {
    /// Resolve a route path to a view
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/level-1" => Some(Self::LevelOne),
            "/level-2" => Some(Self::LevelTwo),
            "/level-3" => Some(Self::LevelThree),
            _ => None,
        }
    }

    /// The route path of this view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::LevelOne => "/level-1",
            Self::LevelTwo => "/level-2",
            Self::LevelThree => "/level-3",
        }
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Select the Dynamic Form Level",
            Self::LevelOne => "Event Registration",
            Self::LevelTwo => "Job Application",
            Self::LevelThree => "Survey",
        }
    }

    /// Short description shown under the title
    pub fn description(&self) -> &'static str {
        match self {
            Self::Home => "Each level adds validation rules and conditional fields",
            Self::LevelOne => "Registration form to register for an event",
            Self::LevelTwo => "Please fill in the form below to apply for the job",
            Self::LevelThree => "Sections of this survey depend on the topic you pick",
        }
    }

    pub fn is_form_view(&self) -> bool {
        !matches!(self, Self::Home)
    }

    /// The form views in home-screen order
    pub const LEVELS: [View; 3] = [View::LevelOne, View::LevelTwo, View::LevelThree];
}

/// Shared application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub view_history: Vec<View>,
    /// Selected entry on the home screen
    pub home_selected: usize,
    /// State of the form on the current view
    pub form: FormState,
    /// Snapshot from the most recent successful submit
    pub last_submission: Option<Submission>,
    /// Whether the summary dialog is open
    pub summary_open: bool,
    /// Queue of runtime error messages shown in the error dialog
    errors: Vec<String>,
}

impl AppState {
    /// Install the form belonging to a view (fresh state per visit)
    pub fn prepare_form(&mut self, view: View) {
        self.form = match view {
            View::Home => FormState::None,
            View::LevelOne => FormState::Registration(RegistrationForm::new()),
            View::LevelTwo => FormState::JobApplication(JobApplicationForm::new()),
            View::LevelThree => FormState::Survey(SurveyForm::new()),
        };
    }

    /// Push an error message onto the dialog queue
    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    /// Dismiss the currently displayed error
    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_path_round_trip() {
            for view in [View::Home, View::LevelOne, View::LevelTwo, View::LevelThree] {
                assert_eq!(View::from_path(view.path()), Some(view));
            }
        }

        #[test]
        fn test_unknown_path_is_rejected() {
            assert_eq!(View::from_path("/level-4"), None);
            assert_eq!(View::from_path(""), None);
            assert_eq!(View::from_path("level-1"), None);
        }

        #[test]
        fn test_home_is_not_a_form_view() {
            assert!(!View::Home.is_form_view());
            for level in View::LEVELS {
                assert!(level.is_form_view());
            }
        }
    }

    mod app_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_prepare_form_matches_view() {
            let mut state = AppState::default();
            state.prepare_form(View::LevelOne);
            assert!(matches!(state.form, FormState::Registration(_)));
            state.prepare_form(View::LevelTwo);
            assert!(matches!(state.form, FormState::JobApplication(_)));
            state.prepare_form(View::LevelThree);
            assert!(matches!(state.form, FormState::Survey(_)));
            state.prepare_form(View::Home);
            assert!(matches!(state.form, FormState::None));
        }

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error(); // Should not panic
        }
    }
}
