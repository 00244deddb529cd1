//! Identity validation.
//!
//! The submitter's email address is the sole natural key for a project
//! record, so every write path validates it up front.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Validate that `email` is a well-formed email address.
///
/// Rejects empty strings, missing `@`, and malformed domains. Does NOT
/// enforce a particular school domain; role assignment handles that
/// separately.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address: '{email}'"
        )))
    }
}
