//! Boundary-side input validation.
//!
//! Runs before a store is called; the stores themselves never produce
//! validation failures.

use crate::domain::model::{NewAuthor, NewBook, RecordId};
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 64;

/// Author names refused regardless of length (compared lowercased).
const REFUSED_AUTHOR_NAMES: &[&str] = &["adolf hitler"];

/// One failed constraint on one input field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Path to the offending field, e.g. `["name"]`.
    pub location: Vec<String>,
    pub message: String,
    /// Machine-readable error code, e.g. `value_error.any_str.min_length`.
    pub kind: String,
    pub ctx: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation Error")]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

fn check_name_length(field: &str, value: &str) -> Option<FieldError> {
    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        return Some(FieldError {
            location: vec![field.to_string()],
            message: format!("ensure this value has at least {NAME_MIN_CHARS} characters"),
            kind: "value_error.any_str.min_length".to_string(),
            ctx: Some(json!({ "limit_value": NAME_MIN_CHARS })),
        });
    }
    if chars > NAME_MAX_CHARS {
        return Some(FieldError {
            location: vec![field.to_string()],
            message: format!("ensure this value has at most {NAME_MAX_CHARS} characters"),
            kind: "value_error.any_str.max_length".to_string(),
            ctx: Some(json!({ "limit_value": NAME_MAX_CHARS })),
        });
    }
    None
}

/// Validates the `create_author` input.
pub fn validate_new_author(name: &str) -> Result<NewAuthor, ValidationErrors> {
    if let Some(err) = check_name_length("name", name) {
        return Err(ValidationErrors::single(err));
    }

    let lowered = name.to_lowercase();
    if REFUSED_AUTHOR_NAMES.contains(&lowered.as_str()) {
        return Err(ValidationErrors::single(FieldError {
            location: vec!["name".to_string()],
            message: "We don't do that here...".to_string(),
            kind: "value_error".to_string(),
            ctx: None,
        }));
    }

    Ok(NewAuthor {
        name: name.to_string(),
    })
}

/// Validates the `create_book` input. Whether the author exists is a store concern.
pub fn validate_new_book(author_id: RecordId, name: &str) -> Result<NewBook, ValidationErrors> {
    if let Some(err) = check_name_length("name", name) {
        return Err(ValidationErrors::single(err));
    }

    Ok(NewBook {
        author_id,
        name: name.to_string(),
    })
}
