use sqlx::{Executor, Postgres};

use crate::models::DeckProgress;

/// Create the zero-progress row for a freshly created deck.
pub async fn create_progress<'e, E>(
    executor: E,
    user_id: i64,
    deck_id: i64,
) -> Result<DeckProgress, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO deck_progress (user_id, deck_id, progress)
            VALUES ($1, $2, 0)
            RETURNING id, user_id, deck_id, progress
        "#,
    )
    .bind(user_id)
    .bind(deck_id)
    .fetch_one(executor)
    .await
}

pub async fn find_progress<'e, E>(
    executor: E,
    user_id: i64,
    deck_id: i64,
) -> Result<Option<DeckProgress>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, deck_id, progress
            FROM deck_progress
            WHERE user_id = $1 AND deck_id = $2
        "#,
    )
    .bind(user_id)
    .bind(deck_id)
    .fetch_optional(executor)
    .await
}
