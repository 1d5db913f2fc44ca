use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use nb_db::models::Card;

use super::service;
use crate::{ApiState, auth::CurrentUser, error::ApiError};

/// Create the practice routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/getRandomCard/{deck_id}", get(get_random_card))
}

async fn get_random_card(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
    Path(deck_id): Path<i64>,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(service::random_card(&state.pool, deck_id, user.id).await?))
}
