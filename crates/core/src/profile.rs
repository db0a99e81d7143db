//! User profile field rules.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::text::{reject_nul, validate_optional, validate_required};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MAX_GENDER_IDENTITY_LEN: usize = 100;

/// Usernames: 3-50 characters of letters, digits, `_`, `-` or `.`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_required("Username", username, MAX_USERNAME_LEN)?;
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '_', '-' and '.'".into(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    reject_nul("Email", email)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_details(
    location: Option<&str>,
    gender_identity: Option<&str>,
) -> Result<(), CoreError> {
    validate_optional("Location", location, MAX_LOCATION_LEN)?;
    validate_optional("Gender identity", gender_identity, MAX_GENDER_IDENTITY_LEN)
}
