use sqlx::{Executor, Postgres};

use crate::models::Deck;

pub async fn create_deck<'e, E>(
    executor: E,
    owner_id: i64,
    name: &str,
    visibility: &str,
    color: &str,
) -> Result<Deck, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO decks (name, visibility, color, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, visibility, color, owner_id
        "#,
    )
    .bind(name)
    .bind(visibility)
    .bind(color)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn list_by_owner<'e, E>(executor: E, owner_id: i64) -> Result<Vec<Deck>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, visibility, color, owner_id
            FROM decks
            WHERE owner_id = $1
            ORDER BY id
        "#,
    )
    .bind(owner_id)
    .fetch_all(executor)
    .await
}

/// Fetch a deck only if it belongs to `owner_id`.
pub async fn find_owned<'e, E>(
    executor: E,
    deck_id: i64,
    owner_id: i64,
) -> Result<Option<Deck>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, visibility, color, owner_id
            FROM decks
            WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(deck_id)
    .bind(owner_id)
    .fetch_optional(executor)
    .await
}
