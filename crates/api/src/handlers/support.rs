//! Handler for the support contact form.

use axum::http::StatusCode;
use axum::Json;
use hub_core::support::SupportRequest;

use crate::error::AppResult;

/// POST /api/v1/support
///
/// Validates and logs the message. Nothing is stored.
pub async fn submit(Json(input): Json<SupportRequest>) -> AppResult<StatusCode> {
    input.check()?;

    tracing::info!(
        email = %input.email,
        subject = %input.subject,
        message_len = input.message.chars().count(),
        "Support request received",
    );

    Ok(StatusCode::ACCEPTED)
}
