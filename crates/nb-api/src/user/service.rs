use nb_db::repositories::user as user_repo;
use sqlx::PgPool;

use super::model::{NewUser, UserResponse};
use crate::{
    auth::{password, validation},
    error::ApiError,
};

/// Validate, hash and persist a new user
pub async fn create_user(
    pool: &PgPool,
    bcrypt_cost: u32,
    new_user: NewUser,
) -> Result<UserResponse, ApiError> {
    let email = new_user.email.trim();

    validation::validate_person_name("firstname", &new_user.firstname)?;
    validation::validate_person_name("lastname", &new_user.lastname)?;
    validation::validate_email(email)?;
    validation::validate_password(&new_user.password)?;

    let password_hash = password::hash_password(&new_user.password, bcrypt_cost)?;

    let user = user_repo::create_user(
        pool,
        new_user.firstname.trim(),
        new_user.lastname.trim(),
        email,
        &password_hash,
        new_user.rgpd,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            ApiError::Conflict("A user with this email already exists".to_string())
        }
        e => ApiError::Database(e),
    })?;

    tracing::info!(user_id = user.id, "User created");

    Ok(user.into())
}

/// Every registered user, ordered by id
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserResponse>, ApiError> {
    let users = user_repo::list_users(pool).await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}
