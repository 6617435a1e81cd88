//! Level 3 form: survey with topic-dependent sections

use super::field::FormField;
use super::form_state::Form;
use crate::state::submission::{
    collect_messages, parse_count, Submission, SurveyResponse, SurveyTopic,
};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

const LANGUAGES: &[&str] = &["JavaScript", "Python", "Java", "C#"];
const PLATFORMS: &[&str] = &["Web", "Mobile", "Desktop", "Cloud", "Embedded"];
const EXERCISE: &[&str] = &["Daily", "Weekly", "Monthly", "Rarely"];
const DIETS: &[&str] = &["Vegetarian", "Vegan", "Non-Vegetarian"];
const QUALIFICATIONS: &[&str] = &["High School", "Bachelor's", "Master's", "PhD"];

/// Survey form whose middle section depends on the chosen topic
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub full_name: FormField,
    pub email: FormField,
    pub topic: FormField,
    pub language: FormField,
    pub platforms: FormField,
    pub years_experience: FormField,
    pub exercise_frequency: FormField,
    pub diet: FormField,
    pub qualification: FormField,
    pub field_of_study: FormField,
    pub feedback: FormField,
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Submit, 1=Reset)
    pub selected_button: usize,
    /// Field name -> inline message from the last failed submit
    pub errors: BTreeMap<String, String>,
}

impl SurveyForm {
    /// Sentinel index for the buttons row
    pub const BUTTONS_ROW: usize = 11;

    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full Name", "Enter your full name"),
            email: FormField::text("email", "Email", "Enter your email"),
            topic: FormField::choice("topic", "Survey Topic", SurveyTopic::OPTIONS),
            language: FormField::choice("language", "Favorite Language", LANGUAGES),
            platforms: FormField::multi_choice("platforms", "Platforms Used", PLATFORMS),
            years_experience: FormField::number(
                "years_experience",
                "Years of Experience",
                "Enter your years of experience",
            ),
            exercise_frequency: FormField::choice(
                "exercise_frequency",
                "Exercise Frequency",
                EXERCISE,
            ),
            diet: FormField::choice("diet", "Diet Preference", DIETS),
            qualification: FormField::choice(
                "qualification",
                "Highest Qualification",
                QUALIFICATIONS,
            ),
            field_of_study: FormField::text(
                "field_of_study",
                "Field of Study",
                "Enter your field of study",
            ),
            feedback: FormField::multiline("feedback", "Feedback", "At least 50 characters"),
            active_field_index: 0,
            selected_button: 0,
            errors: BTreeMap::new(),
        }
    }

    /// The currently selected topic, if any
    pub fn selected_topic(&self) -> Option<SurveyTopic> {
        self.topic.selected_option().and_then(SurveyTopic::from_label)
    }

    /// Toggle between the Submit and Reset buttons
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Validate the form and produce a snapshot, or record inline errors
    pub fn submit(&mut self) -> Option<Submission> {
        let mut errors = BTreeMap::new();

        let topic = self.selected_topic();
        if topic.is_none() {
            errors.insert("topic".to_string(), "Please select a topic".to_string());
        }

        let mut language = None;
        let mut platforms = Vec::new();
        let mut years_experience = None;
        let mut exercise_frequency = None;
        let mut diet = None;
        let mut qualification = None;
        let mut field_of_study = None;

        match topic {
            Some(SurveyTopic::Technology) => {
                language = self.language.selected_option().map(str::to_string);
                if language.is_none() {
                    errors.insert(
                        "language".to_string(),
                        "Please select a language".to_string(),
                    );
                }
                platforms = self.platforms.selected_values();
                if platforms.is_empty() {
                    errors.insert(
                        "platforms".to_string(),
                        "Select at least one platform".to_string(),
                    );
                }
                match parse_count("Years of experience", self.years_experience.as_text()) {
                    Ok(value) => years_experience = Some(value),
                    Err(err) => {
                        errors.insert("years_experience".to_string(), err.to_string());
                    }
                }
            }
            Some(SurveyTopic::Health) => {
                exercise_frequency = self.exercise_frequency.selected_option().map(str::to_string);
                if exercise_frequency.is_none() {
                    errors.insert(
                        "exercise_frequency".to_string(),
                        "Please select how often you exercise".to_string(),
                    );
                }
                diet = self.diet.selected_option().map(str::to_string);
                if diet.is_none() {
                    errors.insert(
                        "diet".to_string(),
                        "Please select a diet preference".to_string(),
                    );
                }
            }
            Some(SurveyTopic::Education) => {
                qualification = self.qualification.selected_option().map(str::to_string);
                if qualification.is_none() {
                    errors.insert(
                        "qualification".to_string(),
                        "Please select a qualification".to_string(),
                    );
                }
                let study = self.field_of_study.as_text().trim();
                if study.is_empty() {
                    errors.insert(
                        "field_of_study".to_string(),
                        "Field of study is required".to_string(),
                    );
                } else {
                    field_of_study = Some(study.to_string());
                }
            }
            None => {}
        }

        let candidate = SurveyResponse {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            full_name: self.full_name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            topic: topic.unwrap_or(SurveyTopic::Technology),
            language,
            platforms,
            years_experience,
            exercise_frequency,
            diet,
            qualification,
            field_of_study,
            feedback: self.feedback.as_text().trim().to_string(),
        };

        if let Err(validation) = candidate.validate() {
            for (field, message) in collect_messages(&validation) {
                errors.entry(field).or_insert(message);
            }
        }

        if errors.is_empty() {
            self.errors.clear();
            Some(Submission::Survey(candidate))
        } else {
            self.errors = errors;
            None
        }
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SurveyForm {
    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = vec![0, 1, 2];
        match self.selected_topic() {
            Some(SurveyTopic::Technology) => indices.extend([3, 4, 5]),
            Some(SurveyTopic::Health) => indices.extend([6, 7]),
            Some(SurveyTopic::Education) => indices.extend([8, 9]),
            None => {}
        }
        indices.push(10);
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
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.topic),
            3 => Some(&self.language),
            4 => Some(&self.platforms),
            5 => Some(&self.years_experience),
            6 => Some(&self.exercise_frequency),
            7 => Some(&self.diet),
            8 => Some(&self.qualification),
            9 => Some(&self.field_of_study),
            10 => Some(&self.feedback),
            _ => None,
        }
    }

    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.topic),
            3 => Some(&mut self.language),
            4 => Some(&mut self.platforms),
            5 => Some(&mut self.years_experience),
            6 => Some(&mut self.exercise_frequency),
            7 => Some(&mut self.diet),
            8 => Some(&mut self.qualification),
            9 => Some(&mut self.field_of_study),
            10 => Some(&mut self.feedback),
            _ => None,
        }
    }
}
