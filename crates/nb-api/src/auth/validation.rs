use super::password::MAX_PASSWORD_BYTES;
use crate::error::ApiError;
use validator::ValidateEmail;

/// Validate email format using the validator crate
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.is_empty() {
        return Err(ApiError::Validation("Email cannot be empty".to_string()));
    }

    if email.len() > 255 {
        return Err(ApiError::Validation("Email is too long".to_string()));
    }

    if !email.validate_email() {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::Validation(format!(
            "Password must be at most {MAX_PASSWORD_BYTES} bytes long"
        )));
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_number = password.chars().any(char::is_numeric);

    if !has_letter || !has_number {
        return Err(ApiError::Validation(
            "Password must contain at least one letter and one number".to_string(),
        ));
    }

    Ok(())
}

/// Validate a first or last name
pub fn validate_person_name(field: &str, value: &str) -> Result<(), ApiError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{field} cannot be empty")));
    }

    if trimmed.chars().count() > 255 {
        return Err(ApiError::Validation(format!(
            "{field} must be at most 255 characters long"
        )));
    }

    // Names are echoed back to the client, keep markup out
    if trimmed.chars().any(|c| matches!(c, '<' | '>') || c.is_control()) {
        return Err(ApiError::Validation(format!(
            "{field} contains invalid characters"
        )));
    }

    Ok(())
}
