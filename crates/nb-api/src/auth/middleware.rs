use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use nb_db::models::User;
use sqlx::PgPool;

use super::{jwt::INVALID_CREDENTIALS, service};
use crate::{error::ApiError, state::AuthConfig};

/// Authenticated user extractor
///
/// Reads the `Authorization: Bearer <token>` header, validates the token and
/// loads the user it names. Any failure rejects the request with 401.
///
/// # Example
/// ```
/// use axum::Json;
/// use nb_api::auth::CurrentUser;
///
/// async fn whoami(CurrentUser(user): CurrentUser) -> Json<String> {
///     Json(user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthConfig: FromRef<S>,
    PgPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let auth_config = AuthConfig::from_ref(state);
        let pool = PgPool::from_ref(state);

        let user = service::resolve_current_user(&pool, &auth_config, bearer.token()).await?;

        Ok(Self(user))
    }
}
