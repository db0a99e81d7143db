//! Support contact form.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// A message submitted through the support contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SupportRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

impl SupportRequest {
    /// Run the field rules, folding all failures into one validation error.
    pub fn check(&self) -> Result<(), CoreError> {
        if [&self.name, &self.subject, &self.message]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(CoreError::Validation(
                "Name, subject and message must not be blank".into(),
            ));
        }
        self.validate().map_err(|errors| {
            let mut messages: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            messages.sort();
            CoreError::Validation(messages.join("; "))
        })
    }
}
