/*
 * Responsibility
 * - course_modules CRUD (a module can be moved to another course)
 * - bulk lookup by course ids for course listings
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct CourseModuleRow {
    pub id: i64,
    pub name: String,
    pub course_id: i64,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<CourseModuleRow>> {
    let rows = sqlx::query_as::<_, CourseModuleRow>(
        r#"
        SELECT id, name, course_id
        FROM course_modules
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_for_courses(
    db: &PgPool,
    course_ids: &[i64],
) -> RepoResult<Vec<CourseModuleRow>> {
    let rows = sqlx::query_as::<_, CourseModuleRow>(
        r#"
        SELECT id, name, course_id
        FROM course_modules
        WHERE course_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(course_ids)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, module_id: i64) -> RepoResult<Option<CourseModuleRow>> {
    let row = sqlx::query_as::<_, CourseModuleRow>(
        r#"
        SELECT id, name, course_id
        FROM course_modules
        WHERE id = $1
        "#,
    )
    .bind(module_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(db: &PgPool, name: &str, course_id: i64) -> RepoResult<CourseModuleRow> {
    let row = sqlx::query_as::<_, CourseModuleRow>(
        r#"
        INSERT INTO course_modules (name, course_id)
        VALUES ($1, $2)
        RETURNING id, name, course_id
        "#,
    )
    .bind(name)
    .bind(course_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    module_id: i64,
    name: Option<&str>,
    course_id: Option<i64>,
) -> RepoResult<Option<CourseModuleRow>> {
    let row = sqlx::query_as::<_, CourseModuleRow>(
        r#"
        UPDATE course_modules
        SET
            name = COALESCE($2, name),
            course_id = COALESCE($3, course_id)
        WHERE id = $1
        RETURNING id, name, course_id
        "#,
    )
    .bind(module_id)
    .bind(name)
    .bind(course_id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn delete(db: &PgPool, module_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM course_modules
        WHERE id = $1
        "#,
    )
    .bind(module_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
