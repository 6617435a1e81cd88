//! Level 1 form: event registration

use super::field::FormField;
use super::form_state::Form;
use crate::state::submission::{collect_messages, parse_count, Registration, Submission};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

const YES_NO: &[&str] = &["Yes", "No"];

/// Registration form to register for an event
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub age: FormField,
    pub attending: FormField,
    pub guest_name: FormField,
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
    /// Field name -> inline message from the last failed submit
    pub errors: BTreeMap<String, String>,
}

impl RegistrationForm {
    /// Sentinel index for the buttons row
    pub const BUTTONS_ROW: usize = 5;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", "Enter your name"),
            email: FormField::text("email", "Email", "example@ex.com"),
            age: FormField::number("age", "Age", "Enter your age"),
            attending: FormField::choice(
                "attending_with_guest",
                "Are you attending with a guest?",
                YES_NO,
            ),
            guest_name: FormField::text("guest_name", "Guest Name", "Enter guest's name"),
            active_field_index: 0,
            selected_button: 0,
            errors: BTreeMap::new(),
        }
    }

    /// Whether the guest answer is "Yes" (None while unanswered)
    pub fn attending_with_guest(&self) -> Option<bool> {
        self.attending.selected_option().map(|o| o == "Yes")
    }

    /// Toggle between the Submit and Reset buttons
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Validate the form and produce a snapshot, or record inline errors
    pub fn submit(&mut self) -> Option<Submission> {
        let mut errors = BTreeMap::new();

        let age = match parse_count("Age", self.age.as_text()) {
            Ok(age) => age,
            Err(err) => {
                errors.insert("age".to_string(), err.to_string());
                0
            }
        };

        let attending = match self.attending_with_guest() {
            Some(attending) => attending,
            None => {
                errors.insert(
                    "attending_with_guest".to_string(),
                    "Please select an option".to_string(),
                );
                false
            }
        };

        let guest_name = if attending {
            let guest = self.guest_name.as_text().trim();
            if guest.is_empty() {
                errors.insert(
                    "guest_name".to_string(),
                    "Guest name is required".to_string(),
                );
            }
            Some(guest.to_string())
        } else {
            None
        };

        let candidate = Registration {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            age,
            attending_with_guest: attending,
            guest_name,
        };

        if let Err(validation) = candidate.validate() {
            for (field, message) in collect_messages(&validation) {
                errors.entry(field).or_insert(message);
            }
        }

        if errors.is_empty() {
            self.errors.clear();
            Some(Submission::Registration(candidate))
        } else {
            self.errors = errors;
            None
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = vec![0, 1, 2, 3];
        if self.attending_with_guest() == Some(true) {
            indices.push(4);
        }
        indices.push(Self::BUTTONS_ROW);
        indices
    }

    fn buttons_row(&self) -> usize {
        Self::BUTTONS_ROW
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.age),
            3 => Some(&self.attending),
            4 => Some(&self.guest_name),
            // Index 5 is the buttons row, no FormField for it
            _ => None,
        }
    }

    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.age),
            3 => Some(&mut self.attending),
            4 => Some(&mut self.guest_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn filled_form(with_guest: bool) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        type_into(&mut form.name, "Ada Lovelace");
        type_into(&mut form.email, "ada@example.com");
        type_into(&mut form.age, "36");
        form.attending.next_option(); // Yes
        if with_guest {
            type_into(&mut form.guest_name, "Charles");
        } else {
            form.attending.next_option(); // No
        }
        form
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = RegistrationForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, 0);
        assert!(form.errors.is_empty());
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert!(form.get_field(RegistrationForm::BUTTONS_ROW).is_none());
    }

    #[test]
    fn test_guest_field_hidden_until_yes() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 5]);
        form.attending.next_option(); // Yes
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 4, 5]);
        form.attending.next_option(); // No
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 5]);
    }

    #[test]
    fn test_navigation_skips_hidden_guest_field() {
        let mut form = RegistrationForm::new();
        form.set_active_field(3);
        form.next_field();
        assert_eq!(form.active_field_index, RegistrationForm::BUTTONS_ROW);
        form.next_field();
        assert_eq!(form.active_field_index, 0); // wrapped

        form.attending.next_option(); // Yes
        form.set_active_field(3);
        form.next_field();
        assert_eq!(form.active_field_index, 4);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons_row() {
        let mut form = RegistrationForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, RegistrationForm::BUTTONS_ROW);
    }

    #[test]
    fn test_empty_submit_collects_required_messages() {
        let mut form = RegistrationForm::new();
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("name").map(String::as_str),
            Some("Name is required")
        );
        assert_eq!(
            form.errors.get("email").map(String::as_str),
            Some("Email is required")
        );
        assert_eq!(
            form.errors.get("age").map(String::as_str),
            Some("Age is required")
        );
        assert_eq!(
            form.errors.get("attending_with_guest").map(String::as_str),
            Some("Please select an option")
        );
        // Hidden guest field must not be flagged
        assert!(!form.errors.contains_key("guest_name"));
    }

    #[test]
    fn test_guest_name_required_when_attending_with_guest() {
        let mut form = filled_form(true);
        form.guest_name.clear();
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("guest_name").map(String::as_str),
            Some("Guest name is required")
        );
    }

    #[test]
    fn test_successful_submit_snapshots_values() {
        let mut form = filled_form(true);
        let submission = form.submit().expect("form should validate");
        assert!(form.errors.is_empty());
        match submission {
            Submission::Registration(reg) => {
                assert_eq!(reg.name, "Ada Lovelace");
                assert_eq!(reg.age, 36);
                assert!(reg.attending_with_guest);
                assert_eq!(reg.guest_name.as_deref(), Some("Charles"));
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_submit_without_guest_drops_guest_name() {
        let mut form = filled_form(false);
        type_into(&mut form.guest_name, "Leftover"); // typed, then switched to No
        let submission = form.submit().expect("form should validate");
        match submission {
            Submission::Registration(reg) => {
                assert!(!reg.attending_with_guest);
                assert_eq!(reg.guest_name, None);
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_next_button_toggles() {
        let mut form = RegistrationForm::new();
        form.next_button();
        assert_eq!(form.selected_button, 1);
        form.next_button();
        assert_eq!(form.selected_button, 0);
    }
}
