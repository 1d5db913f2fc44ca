use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use nb_db::models::Deck;

use super::{model::NewDeck, service};
use crate::{ApiState, auth::CurrentUser, error::ApiError};

/// Create the deck routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/addDeck/", post(add_deck))
        .route("/getAllDecks/", get(get_all_decks))
        .route("/getDeck/{id}", get(get_deck))
}

async fn add_deck(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
    Json(payload): Json<NewDeck>,
) -> Result<(StatusCode, Json<Deck>), ApiError> {
    let deck = service::create_deck(&state.pool, user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(deck)))
}

async fn get_all_decks(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
) -> Result<Json<Vec<Deck>>, ApiError> {
    Ok(Json(service::list_decks(&state.pool, user.id).await?))
}

async fn get_deck(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Deck>, ApiError> {
    Ok(Json(service::get_deck(&state.pool, id, user.id).await?))
}
