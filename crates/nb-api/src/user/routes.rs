use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use super::{
    model::{NewUser, UserResponse},
    service,
};
use crate::{ApiState, auth::CurrentUser, error::ApiError};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/addUser/", post(add_user))
        .route("/getAllUsers/", get(get_all_users))
        .route("/users/me/", get(me))
}

async fn add_user(
    State(state): State<ApiState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = service::create_user(&state.pool, state.auth.bcrypt_cost, payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_all_users(State(state): State<ApiState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(service::list_users(&state.pool).await?))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
