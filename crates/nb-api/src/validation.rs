use crate::error::ApiError;

/// Longest deck name accepted
pub const MAX_DECK_NAME_LEN: usize = 255;
/// Longest visibility or color label accepted
pub const MAX_LABEL_LEN: usize = 50;
/// Longest card side accepted
pub const MAX_CARD_CONTENT_LEN: usize = 10_000;

/// Check a free-text field is not blank and fits in `max_len` characters
///
/// # Examples
/// ```
/// use nb_api::validation::validate_text_field;
///
/// assert!(validate_text_field("name", "Verbs", 255).is_ok());
/// assert!(validate_text_field("name", "  ", 255).is_err());
/// ```
pub fn validate_text_field(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} cannot be empty")));
    }

    if value.chars().count() > max_len {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {max_len} characters long"
        )));
    }

    Ok(())
}

/// Deck name, visibility and color
pub fn validate_deck_fields(name: &str, visibility: &str, color: &str) -> Result<(), ApiError> {
    validate_text_field("name", name, MAX_DECK_NAME_LEN)?;
    validate_text_field("visibility", visibility, MAX_LABEL_LEN)?;
    validate_text_field("color", color, MAX_LABEL_LEN)
}

/// Both sides of a card
pub fn validate_card_fields(front_content: &str, back_content: &str) -> Result<(), ApiError> {
    validate_text_field("front_content", front_content, MAX_CARD_CONTENT_LEN)?;
    validate_text_field("back_content", back_content, MAX_CARD_CONTENT_LEN)
}
