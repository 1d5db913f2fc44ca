use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::{auth, card, deck, error::ApiError, practice, state::ApiState, user};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/unixTimes", get(unix_times))
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .merge(auth::routes())
        .merge(user::routes())
        .merge(deck::routes())
        .merge(card::routes())
        .merge(practice::routes())
        .fallback(handler_404)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "NotaBene API is running" }))
}

/// Server clock as fractional seconds since the epoch
async fn unix_times() -> Json<Value> {
    let now = Utc::now();
    let unix_time = now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6;

    Json(json!({ "unixTime": unix_time }))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Ready once the database answers
async fn ready(State(state): State<ApiState>) -> StatusCode {
    match nb_db::ping(&state.pool).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn handler_404() -> impl IntoResponse {
    ApiError::NotFound("The requested resource was not found".to_string())
}
