//! Sustainable Development Goal catalog and tag normalization.
//!
//! Tags are stored in their canonical form: the goal number as a decimal
//! string (`"1"` through `"17"`). Clients may also submit the labelled forms
//! shown in the UI (`"SDG 5"`, `"SDG 5: Gender Equality"`), which are folded
//! to the canonical number before validation.

use crate::error::CoreError;

/// Number of goals in the UN 2030 agenda.
pub const SDG_COUNT: u8 = 17;

/// Maximum number of SDG tags on a single entity.
pub const MAX_SDG_TAGS: usize = SDG_COUNT as usize;

/// Official short names, indexed by goal number minus one.
const SDG_NAMES: [&str; SDG_COUNT as usize] = [
    "No Poverty",
    "Zero Hunger",
    "Good Health and Well-being",
    "Quality Education",
    "Gender Equality",
    "Clean Water and Sanitation",
    "Affordable and Clean Energy",
    "Decent Work and Economic Growth",
    "Industry, Innovation and Infrastructure",
    "Reduced Inequalities",
    "Sustainable Cities and Communities",
    "Responsible Consumption and Production",
    "Climate Action",
    "Life Below Water",
    "Life on Land",
    "Peace, Justice and Strong Institutions",
    "Partnerships for the Goals",
];

/// Look up the short name of a goal by its number.
pub fn sdg_name(number: u8) -> Option<&'static str> {
    if (1..=SDG_COUNT).contains(&number) {
        Some(SDG_NAMES[usize::from(number - 1)])
    } else {
        None
    }
}

/// Fold a user-supplied tag into its canonical goal number.
///
/// Accepts `"5"`, `"SDG5"`, `"SDG 5"` and `"SDG 5: Gender Equality"`
/// (case-insensitive prefix). Returns `None` if no goal number can be read
/// or the number is out of range.
pub fn canonical_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let without_prefix = match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("sdg") => trimmed[3..].trim_start(),
        _ => trimmed,
    };

    let digits: String = without_prefix
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let rest = &without_prefix[digits.len()..];
    if digits.is_empty() || !(rest.is_empty() || rest.trim_start().starts_with(':')) {
        return None;
    }

    let number: u8 = digits.parse().ok()?;
    sdg_name(number).map(|_| number.to_string())
}

/// Normalize and validate a list of SDG tags.
///
/// Blank entries are dropped, every remaining entry is folded to its
/// canonical number, and duplicates are removed keeping first occurrence.
pub fn normalize_sdg_tags(tags: &[String]) -> Result<Vec<String>, CoreError> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().filter(|t| !t.trim().is_empty()) {
        let canonical = canonical_tag(tag).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid SDG tag '{}'. Expected a goal number between 1 and {SDG_COUNT}",
                tag.trim()
            ))
        })?;
        if !out.contains(&canonical) {
            out.push(canonical);
        }
    }
    if out.len() > MAX_SDG_TAGS {
        return Err(CoreError::Validation(format!(
            "A maximum of {MAX_SDG_TAGS} SDG tags is allowed"
        )));
    }
    Ok(out)
}
