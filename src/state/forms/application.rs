//! Level 2 form: job application

use super::field::FormField;
use super::form_state::Form;
use crate::state::submission::{
    collect_messages, parse_count, JobApplication, Position, Submission,
};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

/// Job application form with position-dependent fields
#[derive(Debug, Clone)]
pub struct JobApplicationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone_number: FormField,
    pub position: FormField,
    pub experience: FormField,
    pub portfolio: FormField,
    pub management_experience: FormField,
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
    /// Field name -> inline message from the last failed submit
    pub errors: BTreeMap<String, String>,
}

impl JobApplicationForm {
    /// Sentinel index for the buttons row
    pub const BUTTONS_ROW: usize = 7;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", "Enter your name"),
            email: FormField::text("email", "Email", "Enter your email"),
            phone_number: FormField::text(
                "phone_number",
                "Phone Number",
                "Enter your phone number",
            ),
            position: FormField::choice("position", "Position", Position::OPTIONS),
            experience: FormField::number("experience", "Experience", "Enter your experience"),
            portfolio: FormField::text("portfolio", "Portfolio URL", "Enter your portfolio URL"),
            management_experience: FormField::number(
                "management_experience",
                "Management Experience",
                "Enter your management experience",
            ),
            active_field_index: 0,
            selected_button: 0,
            errors: BTreeMap::new(),
        }
    }

    /// The currently selected position, if any
    pub fn selected_position(&self) -> Option<Position> {
        self.position.selected_option().and_then(Position::from_label)
    }

    /// Toggle between the Submit and Reset buttons
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Validate the form and produce a snapshot, or record inline errors
    pub fn submit(&mut self) -> Option<Submission> {
        let mut errors = BTreeMap::new();

        let position = self.selected_position();
        if position.is_none() {
            errors.insert(
                "position".to_string(),
                "Please select a position".to_string(),
            );
        }

        // Only fields visible for the chosen position are collected
        let experience = match position {
            Some(p) if p.asks_experience() => {
                match parse_count("Experience", self.experience.as_text()) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        errors.insert("experience".to_string(), err.to_string());
                        None
                    }
                }
            }
            _ => None,
        };

        let portfolio = match position {
            Some(Position::Designer) => {
                Some(self.portfolio.as_text().trim().to_string())
            }
            _ => None,
        };

        let management_experience = match position {
            Some(Position::Manager) => {
                match parse_count(
                    "Management experience",
                    self.management_experience.as_text(),
                ) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        errors.insert("management_experience".to_string(), err.to_string());
                        None
                    }
                }
            }
            _ => None,
        };

        let candidate = JobApplication {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            phone_number: self.phone_number.as_text().trim().to_string(),
            position: position.unwrap_or(Position::Developer),
            experience,
            portfolio,
            management_experience,
        };

        if let Err(validation) = candidate.validate() {
            for (field, message) in collect_messages(&validation) {
                errors.entry(field).or_insert(message);
            }
        }

        if errors.is_empty() {
            self.errors.clear();
            Some(Submission::JobApplication(candidate))
        } else {
            self.errors = errors;
            None
        }
    }
}

impl Default for JobApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for JobApplicationForm {
    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = vec![0, 1, 2, 3];
        match self.selected_position() {
            Some(Position::Developer) => indices.push(4),
            Some(Position::Designer) => indices.extend([4, 5]),
            Some(Position::Manager) => indices.push(6),
            None => {}
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
            2 => Some(&self.phone_number),
            3 => Some(&self.position),
            4 => Some(&self.experience),
            5 => Some(&self.portfolio),
            6 => Some(&self.management_experience),
            _ => None,
        }
    }

    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone_number),
            3 => Some(&mut self.position),
            4 => Some(&mut self.experience),
            5 => Some(&mut self.portfolio),
            6 => Some(&mut self.management_experience),
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

    fn select_position(form: &mut JobApplicationForm, position: Position) {
        form.position.clear();
        loop {
            form.position.next_option();
            if form.selected_position() == Some(position) {
                break;
            }
        }
    }

    fn base_form() -> JobApplicationForm {
        let mut form = JobApplicationForm::new();
        type_into(&mut form.name, "Grace Hopper");
        type_into(&mut form.email, "grace@example.com");
        type_into(&mut form.phone_number, "0123456789");
        form
    }

    #[test]
    fn test_conditional_fields_follow_position() {
        let mut form = JobApplicationForm::new();
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 7]);

        select_position(&mut form, Position::Developer);
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 4, 7]);

        select_position(&mut form, Position::Designer);
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 4, 5, 7]);

        select_position(&mut form, Position::Manager);
        assert_eq!(form.visible_indices(), vec![0, 1, 2, 3, 6, 7]);
    }

    #[test]
    fn test_empty_submit_shows_schema_messages() {
        let mut form = JobApplicationForm::new();
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("name").map(String::as_str),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            form.errors.get("email").map(String::as_str),
            Some("Email is required")
        );
        assert_eq!(
            form.errors.get("phone_number").map(String::as_str),
            Some("Phone number must be at least 10 characters")
        );
        assert_eq!(
            form.errors.get("position").map(String::as_str),
            Some("Please select a position")
        );
        // Conditional fields are hidden, so they carry no errors
        assert!(!form.errors.contains_key("experience"));
        assert!(!form.errors.contains_key("portfolio"));
        assert!(!form.errors.contains_key("management_experience"));
    }

    #[test]
    fn test_developer_requires_experience() {
        let mut form = base_form();
        select_position(&mut form, Position::Developer);
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("experience").map(String::as_str),
            Some("Experience is required")
        );

        type_into(&mut form.experience, "5");
        let submission = form.submit().expect("form should validate");
        match submission {
            Submission::JobApplication(app) => {
                assert_eq!(app.position, Position::Developer);
                assert_eq!(app.experience, Some(5));
                assert_eq!(app.portfolio, None);
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_designer_requires_valid_portfolio() {
        let mut form = base_form();
        select_position(&mut form, Position::Designer);
        type_into(&mut form.experience, "3");
        type_into(&mut form.portfolio, "not a url");
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("portfolio").map(String::as_str),
            Some("Invalid portfolio URL")
        );

        form.portfolio.clear();
        type_into(&mut form.portfolio, "https://example.com/work");
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_manager_requires_management_experience_of_at_least_one() {
        let mut form = base_form();
        select_position(&mut form, Position::Manager);
        type_into(&mut form.management_experience, "0");
        assert!(form.submit().is_none());
        assert_eq!(
            form.errors.get("management_experience").map(String::as_str),
            Some("Management experience must be at least 1")
        );

        form.management_experience.clear();
        type_into(&mut form.management_experience, "2");
        let submission = form.submit().expect("form should validate");
        match submission {
            Submission::JobApplication(app) => {
                assert_eq!(app.management_experience, Some(2));
                assert_eq!(app.experience, None);
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_hidden_values_are_not_collected() {
        let mut form = base_form();
        select_position(&mut form, Position::Designer);
        type_into(&mut form.experience, "3");
        type_into(&mut form.portfolio, "https://example.com/work");
        // Switch away from Designer; its values must not leak into the snapshot
        select_position(&mut form, Position::Manager);
        type_into(&mut form.management_experience, "4");
        let submission = form.submit().expect("form should validate");
        match submission {
            Submission::JobApplication(app) => {
                assert_eq!(app.position, Position::Manager);
                assert_eq!(app.experience, None);
                assert_eq!(app.portfolio, None);
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }
}
