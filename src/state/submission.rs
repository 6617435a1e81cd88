//! Submitted snapshots and their validation rules
//!
//! Each form copies its values into one of these typed structs on submit.
//! The declarative rules carry the inline messages shown under the fields;
//! conditional requirements that depend on another field's value are checked
//! by the owning form and merged into the same field -> message map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Failure to turn a numeric text field into a number
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

/// Parse a digits-only field, distinguishing empty from unparseable
pub fn parse_count(label: &'static str, raw: &str) -> Result<u32, FieldParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldParseError::Required(label));
    }
    raw.parse().map_err(|_| FieldParseError::NotANumber(label))
}

/// Flatten validator output into one message per field, keeping the first
pub fn collect_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(err) = field_errors.first() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {field}"));
            map.insert(field.to_string(), message);
        }
    }
    map
}

/// Position applied for on the Level 2 form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const OPTIONS: &'static [&'static str] = &["Developer", "Designer", "Manager"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Developer" => Some(Self::Developer),
            "Designer" => Some(Self::Designer),
            "Manager" => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Whether the role asks for the relevant-experience field
    pub fn asks_experience(&self) -> bool {
        matches!(self, Self::Developer | Self::Designer)
    }
}

/// Survey topic selected on the Level 3 form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
}

impl SurveyTopic {
    pub const OPTIONS: &'static [&'static str] = &["Technology", "Health", "Education"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Technology" => Some(Self::Technology),
            "Health" => Some(Self::Health),
            "Education" => Some(Self::Education),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Education => "Education",
        }
    }
}

/// Level 1 snapshot: event registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Registration {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    pub age: u32,
    pub attending_with_guest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
}

/// Level 2 snapshot: job application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobApplication {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 characters"))]
    pub phone_number: String,
    pub position: Position,
    // min 0 is a deliberate no-op lower bound on an unsigned count; the
    // parse step produces the user-facing message for anything non-numeric
    #[validate(range(min = 0, message = "Experience must be at least 0"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[validate(url(message = "Invalid portfolio URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[validate(range(min = 1, message = "Management experience must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_experience: Option<u32>,
}

/// Level 3 snapshot: survey response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    pub topic: SurveyTopic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[validate(range(min = 1, message = "Years of experience must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[validate(length(min = 50, message = "Feedback must be at least 50 characters"))]
    pub feedback: String,
}

/// A validated snapshot ready for the summary dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Registration(Registration),
    JobApplication(JobApplication),
    Survey(SurveyResponse),
}

impl Submission {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration(_) => "Event Registration",
            Self::JobApplication(_) => "Job Application",
            Self::Survey(_) => "Survey Response",
        }
    }

    /// Label/value pairs for the summary dialog, visible fields only
    pub fn lines(&self) -> Vec<(String, String)> {
        match self {
            Self::Registration(r) => {
                let mut lines = vec![
                    ("Name".to_string(), r.name.clone()),
                    ("Email".to_string(), r.email.clone()),
                    ("Age".to_string(), r.age.to_string()),
                    (
                        "Attending with Guest".to_string(),
                        if r.attending_with_guest { "Yes" } else { "No" }.to_string(),
                    ),
                ];
                if let Some(guest) = &r.guest_name {
                    lines.push(("Guest Name".to_string(), guest.clone()));
                }
                lines
            }
            Self::JobApplication(a) => {
                let mut lines = vec![
                    ("Name".to_string(), a.name.clone()),
                    ("Email".to_string(), a.email.clone()),
                    ("Phone Number".to_string(), a.phone_number.clone()),
                    ("Position".to_string(), a.position.label().to_string()),
                ];
                if let Some(exp) = a.experience {
                    lines.push(("Experience".to_string(), exp.to_string()));
                }
                if let Some(url) = &a.portfolio {
                    lines.push(("Portfolio URL".to_string(), url.clone()));
                }
                if let Some(exp) = a.management_experience {
                    lines.push(("Management Experience".to_string(), exp.to_string()));
                }
                lines
            }
            Self::Survey(s) => {
                let mut lines = vec![
                    ("Full Name".to_string(), s.full_name.clone()),
                    ("Email".to_string(), s.email.clone()),
                    ("Survey Topic".to_string(), s.topic.label().to_string()),
                ];
                if let Some(lang) = &s.language {
                    lines.push(("Favorite Language".to_string(), lang.clone()));
                }
                if !s.platforms.is_empty() {
                    lines.push(("Platforms".to_string(), s.platforms.join(", ")));
                }
                if let Some(years) = s.years_experience {
                    lines.push(("Years of Experience".to_string(), years.to_string()));
                }
                if let Some(freq) = &s.exercise_frequency {
                    lines.push(("Exercise Frequency".to_string(), freq.clone()));
                }
                if let Some(diet) = &s.diet {
                    lines.push(("Diet Preference".to_string(), diet.clone()));
                }
                if let Some(q) = &s.qualification {
                    lines.push(("Highest Qualification".to_string(), q.clone()));
                }
                if let Some(field) = &s.field_of_study {
                    lines.push(("Field of Study".to_string(), field.clone()));
                }
                lines.push(("Feedback".to_string(), s.feedback.clone()));
                lines
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
