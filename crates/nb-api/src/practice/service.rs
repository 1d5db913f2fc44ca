use nb_db::{
    models::Card,
    repositories::{card as card_repo, deck as deck_repo},
};
use rand::Rng;
use sqlx::PgPool;

use crate::{deck::service::DECK_NOT_FOUND, error::ApiError};

pub const EMPTY_DECK: &str = "No card in the deck";

/// Uniform position in `0..card_count`, `None` for an empty deck
pub fn pick_random_offset<R: Rng + ?Sized>(card_count: i64, rng: &mut R) -> Option<i64> {
    (card_count > 0).then(|| rng.gen_range(0..card_count))
}

/// A uniformly drawn card from one of the user's decks
///
/// Only the drawn row is loaded: the deck is counted, a position is drawn
/// and that single card is fetched.
pub async fn random_card(pool: &PgPool, deck_id: i64, user_id: i64) -> Result<Card, ApiError> {
    if deck_repo::find_owned(pool, deck_id, user_id).await?.is_none() {
        return Err(ApiError::NotFound(DECK_NOT_FOUND.to_string()));
    }

    let card_count = card_repo::count_by_deck(pool, deck_id).await?;

    // Not cryptographic, only used to vary practice order. The generator
    // is not Send and must be gone before the next await.
    let offset = {
        let mut rng = rand::thread_rng();
        pick_random_offset(card_count, &mut rng)
    };
    let Some(offset) = offset else {
        return Err(ApiError::NotFound(EMPTY_DECK.to_string()));
    };

    // Cards are never deleted, so the offset stays in range
    card_repo::nth_in_deck(pool, deck_id, offset)
        .await?
        .ok_or_else(|| ApiError::NotFound(EMPTY_DECK.to_string()))
}
