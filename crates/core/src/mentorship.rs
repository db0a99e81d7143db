//! Mentorship application types, initial status and field rules.

use serde::Serialize;

use crate::error::CoreError;
use crate::search::clean_list;
use crate::text::{validate_labels, validate_optional};

pub const MAX_EXPERTISE_AREAS: usize = 20;
pub const MAX_EXPERTISE_AREA_LEN: usize = 100;
pub const MAX_AVAILABILITY_LEN: usize = 200;
pub const MAX_MOTIVATION_LEN: usize = 2000;

// ---------------------------------------------------------------------------
// Application type
// ---------------------------------------------------------------------------

/// Which side of the mentorship the applicant wants to be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    Mentor,
    Mentee,
}

const VALID_TYPE_STRINGS: &[&str] = &["mentor", "mentee"];

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "mentor" => Ok(Self::Mentor),
            "mentee" => Ok(Self::Mentee),
            other => Err(CoreError::Validation(format!(
                "Invalid application type '{other}'. Must be one of: {}",
                VALID_TYPE_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Application status
// ---------------------------------------------------------------------------

/// Status of a newly submitted application. Reviewers later move it to
/// `approved` or `rejected` directly in the database.
pub const STATUS_PENDING: &str = "pending";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Clean the expertise list and check the free-text fields.
pub fn normalize_application(
    expertise_areas: &[String],
    availability: Option<&str>,
    motivation: Option<&str>,
) -> Result<Vec<String>, CoreError> {
    let areas = clean_list(expertise_areas);
    validate_labels(
        "Expertise areas",
        &areas,
        MAX_EXPERTISE_AREAS,
        MAX_EXPERTISE_AREA_LEN,
    )?;
    validate_optional("Availability", availability, MAX_AVAILABILITY_LEN)?;
    validate_optional("Motivation", motivation, MAX_MOTIVATION_LEN)?;
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn application_type_round_trips_through_strings() {
        for s in VALID_TYPE_STRINGS {
            assert_eq!(ApplicationType::from_str(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn unknown_application_type_is_rejected() {
        assert_matches!(
            ApplicationType::from_str("sponsor"),
            Err(CoreError::Validation(msg)) if msg.contains("mentor, mentee")
        );
    }

    #[test]
    fn expertise_areas_are_cleaned() {
        let areas = vec![" Solar ".to_string(), "".to_string(), "Policy".to_string()];
        let out = normalize_application(&areas, Some("Weekends"), None).unwrap();
        assert_eq!(out, vec!["Solar", "Policy"]);
    }

    #[test]
    fn long_motivation_is_rejected() {
        let long = "x".repeat(MAX_MOTIVATION_LEN + 1);
        assert!(normalize_application(&[], None, Some(&long)).is_err());
    }

    #[test]
    fn pending_is_the_initial_status() {
        assert_eq!(STATUS_PENDING, "pending");
    }
}
