use axum::{Form, Json, Router, extract::State, routing::post};
use serde::Deserialize;

use super::service::{self, Token};
use crate::{ApiState, error::ApiError, middleware::rate_limit};

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    // Login is the only endpoint that checks passwords, throttle it per IP
    Router::new()
        .route("/token", post(login))
        .layer(make_rate_limit_layer!(
            rate_limit::AUTH_RATE_PER_SECOND,
            rate_limit::AUTH_BURST_SIZE
        ))
}

/// OAuth2 password-grant style form; `username` carries the email
#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(state): State<ApiState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<Token>, ApiError> {
    let token = service::login(&state.pool, &state.auth, &form.username, &form.password).await?;

    Ok(Json(token))
}
