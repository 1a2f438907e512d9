//! Field validation for the admin event form.
//!
//! Pure: no I/O, no store access. Messages are surfaced verbatim in the
//! admin UI and are collected in field declaration order, one per
//! violated rule.

use std::fmt;

use crate::event::{EventDraft, EventForm};

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;
pub const DATE_MAX: usize = 100;
pub const TIME_MAX: usize = 100;
pub const LOCATION_MAX: usize = 300;
pub const CAPACITY_MAX: usize = 50;
pub const TICKETING_ID_MAX: usize = 50;

/// Every rule violation for one form submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

/// Check `form` against the field rules and normalize it into a draft.
///
/// Never panics; a failed check comes back as an ordered list of
/// human-readable messages. Blank optional fields normalize to `None`.
pub fn validate(form: &EventForm) -> Result<EventDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.push("Title is required".to_string());
    } else if title.chars().count() > TITLE_MAX {
        errors.push(format!("Title must be less than {TITLE_MAX} characters"));
    }

    let description = form.description.trim();
    if description.chars().count() > DESCRIPTION_MAX {
        errors.push(format!(
            "Description must be less than {DESCRIPTION_MAX} characters"
        ));
    }

    let event_date = form.event_date.trim();
    if event_date.chars().count() > DATE_MAX {
        errors.push(format!("Date must be less than {DATE_MAX} characters"));
    }

    let event_time = form.event_time.trim();
    if event_time.chars().count() > TIME_MAX {
        errors.push(format!("Time must be less than {TIME_MAX} characters"));
    }

    let location = form.location.trim();
    if location.chars().count() > LOCATION_MAX {
        errors.push(format!(
            "Location must be less than {LOCATION_MAX} characters"
        ));
    }

    let capacity = form.capacity.trim();
    if capacity.chars().count() > CAPACITY_MAX {
        errors.push(format!(
            "Capacity must be less than {CAPACITY_MAX} characters"
        ));
    }

    let ticketing_id = form.ticketing_id.trim();
    if ticketing_id.is_empty() {
        errors.push("Ticketing ID is required".to_string());
    } else {
        if ticketing_id.chars().count() > TICKETING_ID_MAX {
            errors.push(format!(
                "Ticketing ID must be less than {TICKETING_ID_MAX} characters"
            ));
        }
        if !ticketing_id.chars().all(|c| c.is_ascii_digit()) {
            errors.push("Ticketing ID must contain only numbers".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(EventDraft {
        title: title.to_string(),
        description: optional(description),
        event_date: optional(event_date),
        event_time: optional(event_time),
        location: optional(location),
        capacity: optional(capacity),
        ticketing_id: ticketing_id.to_string(),
    })
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> EventForm {
        EventForm {
            title: "Career Transition Workshop".to_string(),
            description: "Learn proven strategies for changing fields.".to_string(),
            event_date: "December 15, 2025".to_string(),
            event_time: "2:00 PM - 5:00 PM".to_string(),
            location: "Online via Zoom".to_string(),
            capacity: "20 spots available".to_string(),
            ticketing_id: "1975525265248".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let draft = validate(&full_form()).unwrap();
        assert_eq!(draft.title, "Career Transition Workshop");
        assert_eq!(draft.ticketing_id, "1975525265248");
        assert_eq!(draft.event_date.as_deref(), Some("December 15, 2025"));
    }

    #[test]
    fn test_blank_optionals_normalize_to_absent() {
        let form = EventForm {
            title: "Resume Bootcamp".to_string(),
            ticketing_id: "1975525265248".to_string(),
            ..Default::default()
        };
        let draft = validate(&form).unwrap();
        assert_eq!(draft.description, None);
        assert_eq!(draft.event_date, None);
        assert_eq!(draft.event_time, None);
        assert_eq!(draft.location, None);
        assert_eq!(draft.capacity, None);
    }

    #[test]
    fn test_whitespace_only_optionals_normalize_to_absent() {
        let mut form = full_form();
        form.description = "   ".to_string();
        form.location = "\t".to_string();
        let draft = validate(&form).unwrap();
        assert_eq!(draft.description, None);
        assert_eq!(draft.location, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = full_form();
        form.title = "  Resume Bootcamp  ".to_string();
        form.ticketing_id = " 12345 ".to_string();
        let draft = validate(&form).unwrap();
        assert_eq!(draft.title, "Resume Bootcamp");
        assert_eq!(draft.ticketing_id, "12345");
    }

    #[test]
    fn test_missing_title_is_one_error() {
        let mut form = full_form();
        form.title = String::new();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.messages(), ["Title is required"]);
    }

    #[test]
    fn test_overlong_title_is_one_error() {
        let mut form = full_form();
        form.title = "a".repeat(TITLE_MAX + 1);
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            ["Title must be less than 200 characters"]
        );
    }

    #[test]
    fn test_title_at_limit_passes() {
        let mut form = full_form();
        form.title = "a".repeat(TITLE_MAX);
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let mut form = full_form();
        form.title = "é".repeat(TITLE_MAX);
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_overlong_description() {
        let mut form = full_form();
        form.description = "x".repeat(DESCRIPTION_MAX + 1);
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            ["Description must be less than 2000 characters"]
        );
    }

    #[test]
    fn test_non_numeric_ticketing_id_is_rejected() {
        let mut form = full_form();
        form.ticketing_id = "abc123".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            ["Ticketing ID must contain only numbers"]
        );
    }

    #[test]
    fn test_short_non_numeric_ticketing_id_is_rejected() {
        // The numeric rule applies regardless of length
        let mut form = full_form();
        form.ticketing_id = "x".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            ["Ticketing ID must contain only numbers"]
        );
    }

    #[test]
    fn test_missing_ticketing_id_is_one_error() {
        let mut form = full_form();
        form.ticketing_id = "  ".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.messages(), ["Ticketing ID is required"]);
    }

    #[test]
    fn test_overlong_non_numeric_ticketing_id_reports_both_rules() {
        let mut form = full_form();
        form.ticketing_id = "z".repeat(TICKETING_ID_MAX + 1);
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Ticketing ID must be less than 50 characters",
                "Ticketing ID must contain only numbers",
            ]
        );
    }

    #[test]
    fn test_multiple_violations_come_back_in_field_order() {
        let form = EventForm {
            title: String::new(),
            description: "x".repeat(DESCRIPTION_MAX + 1),
            ticketing_id: "abc".to_string(),
            ..Default::default()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Title is required",
                "Description must be less than 2000 characters",
                "Ticketing ID must contain only numbers",
            ]
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let mut form = full_form();
        form.title = String::new();
        form.ticketing_id = String::new();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Title is required; Ticketing ID is required"
        );
    }
}
