/*
 * Responsibility
 * - SQLx operations on the users table
 * - Take &PgPool and provide create / lookup / small updates
 * - Return DB errors as RepoError (unique email → Conflict)
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

/// Only what login needs.
#[derive(Debug, FromRow)]
pub struct CredentialRow {
    pub id: i64,
    pub password_hash: String,
}

pub async fn create(
    db: &PgPool,
    full_name: &str,
    email: &str,
    password_hash: &str,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (full_name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(full_name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(id)
}

pub async fn find_credentials_by_email(
    db: &PgPool,
    email: &str,
) -> RepoResult<Option<CredentialRow>> {
    let row = sqlx::query_as::<_, CredentialRow>(
        r#"
        SELECT id, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: i64) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, full_name, email, bio, profile_image
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn exists(db: &PgPool, user_id: i64) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(found)
}

pub async fn set_profile_image(db: &PgPool, user_id: i64, path: &str) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET profile_image = $2
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(path)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
