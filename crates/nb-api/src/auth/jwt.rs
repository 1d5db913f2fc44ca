use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Message shared by every token rejection so callers cannot tell the causes apart
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user email
    pub exp: usize,
    pub iat: usize,
}

/// Issue an HS256 access token whose subject is the user's email
pub fn issue_token(
    subject_email: &str,
    jwt_secret: &str,
    expiry_minutes: i64,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: subject_email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::minutes(expiry_minutes)).timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify a token and return its subject email
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<String, ApiError> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("Rejected bearer token: {e}");
        ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
    })?;

    let subject = token_data.claims.sub;
    if subject.trim().is_empty() {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    Ok(subject)
}
