use sqlx::{Executor, Postgres};

use crate::models::User;

pub async fn create_user<'e, E>(
    executor: E,
    firstname: &str,
    lastname: &str,
    email: &str,
    password_hash: &str,
    rgpd: bool,
) -> Result<User, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO users (firstname, lastname, email, password_hash, rgpd)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, password_hash, rgpd
        "#,
    )
    .bind(firstname)
    .bind(lastname)
    .bind(email)
    .bind(password_hash)
    .bind(rgpd)
    .fetch_one(executor)
    .await
}

pub async fn list_users<'e, E>(executor: E) -> Result<Vec<User>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, firstname, lastname, email, password_hash, rgpd
            FROM users
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, firstname, lastname, email, password_hash, rgpd
            FROM users
            WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}
