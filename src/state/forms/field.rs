//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Radio group or dropdown with exactly one selectable option
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    /// Checkbox group producing a string array
    MultiChoice {
        options: &'static [&'static str],
        selected: Vec<usize>,
        cursor: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub placeholder: String,
    pub is_multiline: bool,
    /// Restricts text input to ASCII digits (age, experience counts)
    pub numeric: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            placeholder: placeholder.to_string(),
            is_multiline: false,
            numeric: false,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Create a new digits-only text field
    pub fn number(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            numeric: true,
            ..Self::text(name, label, placeholder)
        }
    }

    /// Create a new single-choice field with no initial selection
    pub fn choice(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            placeholder: String::new(),
            is_multiline: false,
            numeric: false,
        }
    }

    /// Create a new multi-choice field with nothing selected
    pub fn multi_choice(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::MultiChoice {
                options,
                selected: Vec::new(),
                cursor: 0,
            },
            placeholder: String::new(),
            is_multiline: false,
            numeric: false,
        }
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the selected option of a choice field
    pub fn selected_option(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice { options, selected } => selected.map(|i| options[i]),
            _ => None,
        }
    }

    /// Get the selected options of a multi-choice field
    pub fn selected_values(&self) -> Vec<String> {
        match &self.value {
            FieldValue::MultiChoice {
                options, selected, ..
            } => selected.iter().map(|&i| options[i].to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.numeric && !c.is_ascii_digit() {
                return;
            }
            if c == '\n' && !self.is_multiline {
                return;
            }
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Cycle a choice field forward, or move the multi-choice cursor right
    pub fn next_option(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, selected } => {
                *selected = Some(match *selected {
                    Some(i) => (i + 1) % options.len(),
                    None => 0,
                });
            }
            FieldValue::MultiChoice {
                options, cursor, ..
            } => {
                *cursor = (*cursor + 1) % options.len();
            }
            FieldValue::Text(_) => {}
        }
    }

    /// Cycle a choice field backward, or move the multi-choice cursor left
    pub fn prev_option(&mut self) {
        match &mut self.value {
            FieldValue::Choice { options, selected } => {
                *selected = Some(match *selected {
                    Some(0) | None => options.len() - 1,
                    Some(i) => i - 1,
                });
            }
            FieldValue::MultiChoice {
                options, cursor, ..
            } => {
                *cursor = if *cursor == 0 {
                    options.len() - 1
                } else {
                    *cursor - 1
                };
            }
            FieldValue::Text(_) => {}
        }
    }

    /// Toggle the multi-choice entry under the cursor
    pub fn toggle_option(&mut self) {
        if let FieldValue::MultiChoice {
            selected, cursor, ..
        } = &mut self.value
        {
            if let Some(pos) = selected.iter().position(|&i| i == *cursor) {
                selected.remove(pos);
            } else {
                selected.push(*cursor);
                selected.sort_unstable();
            }
        }
    }

    /// Clear the field value
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::MultiChoice {
                selected, cursor, ..
            } => {
                selected.clear();
                *cursor = 0;
            }
        }
    }

    /// Get the display value for rendering
    #[allow(dead_code)]
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => selected
                .map(|i| options[i].to_string())
                .unwrap_or_default(),
            FieldValue::MultiChoice { .. } => self.selected_values().join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const POSITIONS: &[&str] = &["Developer", "Designer", "Manager"];

    #[test]
    fn test_text_push_pop() {
        let mut field = FormField::text("name", "Name", "Enter your name");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_numeric_field_rejects_non_digits() {
        let mut field = FormField::number("age", "Age", "Enter your age");
        field.push_char('2');
        field.push_char('x');
        field.push_char('5');
        assert_eq!(field.as_text(), "25");
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut field = FormField::text("name", "Name", "");
        field.push_char('\n');
        assert_eq!(field.as_text(), "");

        let mut multi = FormField::multiline("feedback", "Feedback", "");
        multi.push_char('\n');
        assert_eq!(multi.as_text(), "\n");
    }

    #[test]
    fn test_choice_starts_unselected() {
        let field = FormField::choice("position", "Position", POSITIONS);
        assert_eq!(field.selected_option(), None);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut field = FormField::choice("position", "Position", POSITIONS);
        field.next_option();
        assert_eq!(field.selected_option(), Some("Developer"));
        field.next_option();
        field.next_option();
        assert_eq!(field.selected_option(), Some("Manager"));
        field.next_option();
        assert_eq!(field.selected_option(), Some("Developer"));
        field.prev_option();
        assert_eq!(field.selected_option(), Some("Manager"));
    }

    #[test]
    fn test_prev_option_from_unselected_picks_last() {
        let mut field = FormField::choice("position", "Position", POSITIONS);
        field.prev_option();
        assert_eq!(field.selected_option(), Some("Manager"));
    }

    #[test]
    fn test_multi_choice_toggle_is_symmetric() {
        let mut field = FormField::multi_choice("platforms", "Platforms", POSITIONS);
        field.toggle_option();
        assert_eq!(field.selected_values(), vec!["Developer".to_string()]);
        field.toggle_option();
        assert!(field.selected_values().is_empty());
    }

    #[test]
    fn test_multi_choice_selection_stays_sorted() {
        let mut field = FormField::multi_choice("platforms", "Platforms", POSITIONS);
        field.next_option();
        field.next_option();
        field.toggle_option(); // Manager
        field.prev_option();
        field.prev_option();
        field.toggle_option(); // Developer
        assert_eq!(
            field.selected_values(),
            vec!["Developer".to_string(), "Manager".to_string()]
        );
        assert_eq!(field.display_value(), "Developer, Manager");
    }

    #[test]
    fn test_clear_resets_all_variants() {
        let mut text = FormField::text("name", "Name", "");
        text.push_char('x');
        text.clear();
        assert_eq!(text.as_text(), "");

        let mut choice = FormField::choice("position", "Position", POSITIONS);
        choice.next_option();
        choice.clear();
        assert_eq!(choice.selected_option(), None);

        let mut multi = FormField::multi_choice("platforms", "Platforms", POSITIONS);
        multi.toggle_option();
        multi.clear();
        assert!(multi.selected_values().is_empty());
    }
}
