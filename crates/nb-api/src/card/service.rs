use nb_db::{
    models::{Card, CardState},
    repositories::{card as card_repo, deck as deck_repo},
};
use sqlx::PgPool;

use super::model::NewCard;
use crate::{deck::service::DECK_NOT_FOUND, error::ApiError, validation};

pub const CARD_NOT_FOUND: &str = "Card not found";

/// Add a card in the `not memorized` state to `deck_id`
///
/// Ownership of the deck is only checked when `enforce_ownership` is set.
pub async fn create_card(
    pool: &PgPool,
    deck_id: i64,
    requester_id: i64,
    enforce_ownership: bool,
    new_card: NewCard,
) -> Result<Card, ApiError> {
    validation::validate_card_fields(&new_card.front_content, &new_card.back_content)?;

    if enforce_ownership && deck_repo::find_owned(pool, deck_id, requester_id).await?.is_none() {
        return Err(ApiError::NotFound(DECK_NOT_FOUND.to_string()));
    }

    let card = card_repo::create_card(
        pool,
        deck_id,
        &new_card.front_content,
        &new_card.back_content,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            ApiError::NotFound(DECK_NOT_FOUND.to_string())
        }
        e => ApiError::Database(e),
    })?;

    tracing::info!(card_id = card.id, deck_id, requester_id, "Card created");

    Ok(card)
}

/// Set the review state of a card
///
/// Ownership of the card's deck is only checked when `enforce_ownership` is set.
pub async fn update_card_state(
    pool: &PgPool,
    card_id: i64,
    state: CardState,
    requester_id: i64,
    enforce_ownership: bool,
) -> Result<Card, ApiError> {
    if enforce_ownership {
        let owner = card_repo::find_deck_owner(pool, card_id).await?;
        if owner != Some(requester_id) {
            return Err(ApiError::NotFound(CARD_NOT_FOUND.to_string()));
        }
    }

    let card = card_repo::update_state(pool, card_id, state)
        .await?
        .ok_or_else(|| ApiError::NotFound(CARD_NOT_FOUND.to_string()))?;

    tracing::debug!(card_id, state = %state, requester_id, "Card state updated");

    Ok(card)
}
