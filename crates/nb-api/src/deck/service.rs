use nb_db::{
    models::Deck,
    repositories::{deck as deck_repo, progress as progress_repo},
};
use sqlx::PgPool;

use super::model::NewDeck;
use crate::{error::ApiError, validation};

pub const DECK_NOT_FOUND: &str = "Deck not found";

/// Create a deck owned by `owner_id` together with its zero progress row
pub async fn create_deck(pool: &PgPool, owner_id: i64, new_deck: NewDeck) -> Result<Deck, ApiError> {
    validation::validate_deck_fields(&new_deck.name, &new_deck.visibility, &new_deck.color)?;

    // Deck and progress row land together or not at all
    let mut tx = pool.begin().await?;

    let deck = deck_repo::create_deck(
        &mut *tx,
        owner_id,
        new_deck.name.trim(),
        new_deck.visibility.trim(),
        new_deck.color.trim(),
    )
    .await?;

    progress_repo::create_progress(&mut *tx, owner_id, deck.id).await?;

    tx.commit().await?;

    tracing::info!(deck_id = deck.id, owner_id, "Deck created");

    Ok(deck)
}

/// Decks owned by `owner_id`, ordered by id
pub async fn list_decks(pool: &PgPool, owner_id: i64) -> Result<Vec<Deck>, ApiError> {
    Ok(deck_repo::list_by_owner(pool, owner_id).await?)
}

/// One of the owner's decks; decks owned by someone else do not exist
pub async fn get_deck(pool: &PgPool, deck_id: i64, owner_id: i64) -> Result<Deck, ApiError> {
    deck_repo::find_owned(pool, deck_id, owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(DECK_NOT_FOUND.to_string()))
}
