use nb_db::{models::User, repositories::user as user_repo};
use serde::Serialize;
use sqlx::PgPool;

use super::{jwt, password};
use crate::{error::ApiError, metrics::record_auth_event, state::AuthConfig};

/// Same message for unknown email and wrong password
pub const INCORRECT_LOGIN: &str = "Incorrect email or password";

/// Body returned by `POST /token`
#[derive(Debug, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: &'static str,
}

impl Token {
    pub const fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Exchange an email and password for an access token
pub async fn login(
    pool: &PgPool,
    auth: &AuthConfig,
    email: &str,
    password: &str,
) -> Result<Token, ApiError> {
    let Some(user) = user_repo::find_by_email(pool, email).await? else {
        tracing::info!("Login attempt for unknown email");
        record_auth_event("login", false);
        return Err(ApiError::Unauthorized(INCORRECT_LOGIN.to_string()));
    };

    if !password::verify_password(password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Login attempt with wrong password");
        record_auth_event("login", false);
        return Err(ApiError::Unauthorized(INCORRECT_LOGIN.to_string()));
    }

    let access_token = jwt::issue_token(&user.email, &auth.jwt_secret, auth.jwt_expiry_minutes)?;

    tracing::info!(user_id = user.id, "User logged in");
    record_auth_event("login", true);

    Ok(Token::bearer(access_token))
}

/// Resolve a bearer token to the user it was issued for
///
/// A valid token whose subject no longer exists is rejected like a bad token.
pub async fn resolve_current_user(
    pool: &PgPool,
    auth: &AuthConfig,
    token: &str,
) -> Result<User, ApiError> {
    let email = jwt::validate_token(token, &auth.jwt_secret).inspect_err(|_| {
        record_auth_event("token", false);
    })?;

    user_repo::find_by_email(pool, &email).await?.ok_or_else(|| {
        tracing::debug!("Token subject has no matching user");
        record_auth_event("token", false);
        ApiError::Unauthorized(jwt::INVALID_CREDENTIALS.to_string())
    })
}
