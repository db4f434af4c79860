//! Request validation helpers.
//!
//! DTOs derive [`validator::Validate`]; handlers call [`validate`] before
//! touching the database so malformed input never reaches storage.

use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Minimum accepted password length for self-registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Run the derived validation rules of `input`.
pub fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Reject an empty or whitespace-only required string field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject ids that cannot name a row (BIGSERIAL starts at 1).
pub fn require_positive_id(field: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive id"
        )));
    }
    Ok(())
}

/// `validator` custom rule: the string must contain a non-whitespace character.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
