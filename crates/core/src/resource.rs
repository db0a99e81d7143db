//! Community resource categories.

use serde::Serialize;

use crate::error::CoreError;
use crate::search::clean_list;
use crate::text::validate_labels;

pub const MAX_RESOURCE_TITLE_LEN: usize = 200;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MAX_ACCESSIBILITY_TAGS: usize = 20;
pub const MAX_ACCESSIBILITY_TAG_LEN: usize = 100;

/// Kind of resource listed in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Grant,
    Training,
    Equipment,
}

const VALID_RESOURCE_TYPES: &[&str] = &["grant", "training", "equipment"];

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grant => "grant",
            Self::Training => "training",
            Self::Equipment => "equipment",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim() {
            "grant" => Ok(Self::Grant),
            "training" => Ok(Self::Training),
            "equipment" => Ok(Self::Equipment),
            other => Err(CoreError::Validation(format!(
                "Invalid resource type '{other}'. Must be one of: {}",
                VALID_RESOURCE_TYPES.join(", ")
            ))),
        }
    }
}

/// Clean the accessibility feature list (e.g. "Wheelchair access").
pub fn normalize_accessibility(features: &[String]) -> Result<Vec<String>, CoreError> {
    let cleaned = clean_list(features);
    validate_labels(
        "Accessibility",
        &cleaned,
        MAX_ACCESSIBILITY_TAGS,
        MAX_ACCESSIBILITY_TAG_LEN,
    )?;
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_types_parse() {
        assert_eq!(ResourceType::from_str("grant").unwrap(), ResourceType::Grant);
        assert_eq!(ResourceType::from_str(" training ").unwrap().as_str(), "training");
        assert!(ResourceType::from_str("loan").is_err());
    }

    #[test]
    fn accessibility_is_cleaned_and_checked() {
        let features = vec![" Ramp ".to_string(), " ".to_string()];
        assert_eq!(normalize_accessibility(&features).unwrap(), vec!["Ramp"]);
        assert!(normalize_accessibility(&["Braille\0".to_string()]).is_err());
    }
}
