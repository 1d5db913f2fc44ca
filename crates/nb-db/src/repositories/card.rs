use sqlx::{Executor, Postgres};

use crate::models::{Card, CardState};

pub async fn create_card<'e, E>(
    executor: E,
    deck_id: i64,
    front_content: &str,
    back_content: &str,
) -> Result<Card, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO cards (front_content, back_content, deck_id)
            VALUES ($1, $2, $3)
            RETURNING id, front_content, back_content, state, deck_id
        "#,
    )
    .bind(front_content)
    .bind(back_content)
    .bind(deck_id)
    .fetch_one(executor)
    .await
}

/// Owner of the deck a card belongs to, `None` if the card does not exist.
pub async fn find_deck_owner<'e, E>(executor: E, card_id: i64) -> Result<Option<i64>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT d.owner_id
            FROM cards c
            JOIN decks d ON d.id = c.deck_id
            WHERE c.id = $1
        "#,
    )
    .bind(card_id)
    .fetch_optional(executor)
    .await
}

/// Set the review state of a card. Returns `None` when the card does not exist.
pub async fn update_state<'e, E>(
    executor: E,
    card_id: i64,
    state: CardState,
) -> Result<Option<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE cards
            SET state = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, front_content, back_content, state, deck_id
        "#,
    )
    .bind(state)
    .bind(card_id)
    .fetch_optional(executor)
    .await
}

/// Number of cards in a deck
pub async fn count_by_deck<'e, E>(executor: E, deck_id: i64) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM cards
            WHERE deck_id = $1
        "#,
    )
    .bind(deck_id)
    .fetch_one(executor)
    .await
}

/// The card at position `offset` (0-based, id order) in a deck
pub async fn nth_in_deck<'e, E>(
    executor: E,
    deck_id: i64,
    offset: i64,
) -> Result<Option<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, front_content, back_content, state, deck_id
            FROM cards
            WHERE deck_id = $1
            ORDER BY id
            OFFSET $2
            LIMIT 1
        "#,
    )
    .bind(deck_id)
    .bind(offset)
    .fetch_optional(executor)
    .await
}
