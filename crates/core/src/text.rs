//! Length and presence checks shared by every form-backed entity.

use crate::error::CoreError;

/// Validate a required free-text field: non-blank and at most `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    check_text(field, value, max)
}

/// Validate an optional free-text field: at most `max` characters when present.
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) => check_text(field, v, max),
        None => Ok(()),
    }
}

/// Validate a list of short labels (skills, metrics, expertise areas).
pub fn validate_labels(
    field: &str,
    labels: &[String],
    max_items: usize,
    max_len: usize,
) -> Result<(), CoreError> {
    if labels.len() > max_items {
        return Err(CoreError::Validation(format!(
            "{field} accepts at most {max_items} entries"
        )));
    }
    for label in labels {
        check_text(field, label, max_len)?;
    }
    Ok(())
}

/// Reject text containing a NUL character, which Postgres cannot store in
/// `TEXT` or `JSONB` values.
pub fn reject_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

fn check_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    reject_nul(field, value)?;
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
