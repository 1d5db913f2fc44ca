use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{post, put},
};
use nb_db::models::Card;

use super::{
    model::{AddCardQuery, NewCard, UpdateCardQuery},
    service,
};
use crate::{ApiState, auth::CurrentUser, error::ApiError};

/// Create the card routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/addCard/", post(add_card))
        .route("/updateCard/{id}", put(update_card))
}

async fn add_card(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
    Query(query): Query<AddCardQuery>,
    Json(payload): Json<NewCard>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let card = service::create_card(
        &state.pool,
        query.deck_id,
        user.id,
        state.enforce_card_ownership,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(card)))
}

async fn update_card(
    CurrentUser(user): CurrentUser,
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdateCardQuery>,
) -> Result<Json<Card>, ApiError> {
    let card = service::update_card_state(
        &state.pool,
        id,
        query.state,
        user.id,
        state.enforce_card_ownership,
    )
    .await?;

    Ok(Json(card))
}
