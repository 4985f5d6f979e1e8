/*
 * Responsibility
 * - Profile sub-resources: location / education / work experience / licenses
 * - Profile update runs in one transaction (all or nothing)
 * - Entries with an id are only touched when they belong to the user
 */
use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::repos::error::RepoResult;

#[derive(Debug, FromRow)]
pub struct LocationRow {
    pub country_region: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct EducationRow {
    pub id: i64,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, FromRow)]
pub struct WorkExperienceRow {
    pub id: i64,
    pub company: Option<String>,
    pub role_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, FromRow)]
pub struct LicenseRow {
    pub id: i64,
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub credentials_id: Option<String>,
    pub credential_url: Option<String>,
}

// Update inputs. `None` fields keep the stored value.

#[derive(Debug, Default)]
pub struct LocationUpdate {
    pub country_region: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Default)]
pub struct EducationUpdate {
    pub id: Option<i64>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default)]
pub struct WorkExperienceUpdate {
    pub id: Option<i64>,
    pub company: Option<String>,
    pub role_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default)]
pub struct LicenseUpdate {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub credentials_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub location: Option<LocationUpdate>,
    pub education: Vec<EducationUpdate>,
    pub work_experience: Vec<WorkExperienceUpdate>,
    pub licenses_certifications: Vec<LicenseUpdate>,
}

pub async fn get_location(db: &PgPool, user_id: i64) -> RepoResult<Option<LocationRow>> {
    let row = sqlx::query_as::<_, LocationRow>(
        r#"
        SELECT country_region, city
        FROM locations
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn list_education(db: &PgPool, user_id: i64) -> RepoResult<Vec<EducationRow>> {
    let rows = sqlx::query_as::<_, EducationRow>(
        r#"
        SELECT id, school, degree, field_of_study, start_date, end_date
        FROM educations
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_work_experience(
    db: &PgPool,
    user_id: i64,
) -> RepoResult<Vec<WorkExperienceRow>> {
    let rows = sqlx::query_as::<_, WorkExperienceRow>(
        r#"
        SELECT id, company, role_title, job_description, start_date, end_date
        FROM work_experiences
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn list_licenses(db: &PgPool, user_id: i64) -> RepoResult<Vec<LicenseRow>> {
    let rows = sqlx::query_as::<_, LicenseRow>(
        r#"
        SELECT
            id, name, issuing_organization, issue_date, expiration_date,
            credentials_id, credential_url
        FROM licenses_certifications
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Apply a profile update. Returns false when the user does not exist.
pub async fn update(db: &PgPool, user_id: i64, changes: &ProfileUpdate) -> RepoResult<bool> {
    let mut tx = db.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE users
        SET
            full_name = COALESCE($2, full_name),
            bio = COALESCE($3, bio),
            profile_image = COALESCE($4, profile_image)
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(changes.full_name.as_deref())
    .bind(changes.bio.as_deref())
    .bind(changes.profile_image.as_deref())
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        // Nothing to roll back yet; dropping tx aborts it.
        return Ok(false);
    }

    if let Some(location) = &changes.location {
        upsert_location(&mut tx, user_id, location).await?;
    }
    for entry in &changes.education {
        save_education(&mut tx, user_id, entry).await?;
    }
    for entry in &changes.work_experience {
        save_work_experience(&mut tx, user_id, entry).await?;
    }
    for entry in &changes.licenses_certifications {
        save_license(&mut tx, user_id, entry).await?;
    }

    tx.commit().await?;
    Ok(true)
}

async fn upsert_location(
    conn: &mut PgConnection,
    user_id: i64,
    location: &LocationUpdate,
) -> RepoResult<()> {
    sqlx::query(
        r#"
        INSERT INTO locations (user_id, country_region, city)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE
        SET
            country_region = COALESCE(EXCLUDED.country_region, locations.country_region),
            city = COALESCE(EXCLUDED.city, locations.city)
        "#,
    )
    .bind(user_id)
    .bind(location.country_region.as_deref())
    .bind(location.city.as_deref())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn save_education(
    conn: &mut PgConnection,
    user_id: i64,
    entry: &EducationUpdate,
) -> RepoResult<()> {
    match entry.id {
        Some(id) => {
            sqlx::query(
                r#"
                UPDATE educations
                SET
                    school = COALESCE($3, school),
                    degree = COALESCE($4, degree),
                    field_of_study = COALESCE($5, field_of_study),
                    start_date = COALESCE($6, start_date),
                    end_date = COALESCE($7, end_date)
                WHERE id = $1 AND user_id = $2
                "#,
            )
            .bind(id)
            .bind(user_id)
            .bind(entry.school.as_deref())
            .bind(entry.degree.as_deref())
            .bind(entry.field_of_study.as_deref())
            .bind(entry.start_date)
            .bind(entry.end_date)
            .execute(&mut *conn)
            .await?;
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO educations
                    (user_id, school, degree, field_of_study, start_date, end_date)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user_id)
            .bind(entry.school.as_deref())
            .bind(entry.degree.as_deref())
            .bind(entry.field_of_study.as_deref())
            .bind(entry.start_date)
            .bind(entry.end_date)
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(())
}

async fn save_work_experience(
    conn: &mut PgConnection,
    user_id: i64,
    entry: &WorkExperienceUpdate,
) -> RepoResult<()> {
    match entry.id {
        Some(id) => {
            sqlx::query(
                r#"
                UPDATE work_experiences
                SET
                    company = COALESCE($3, company),
                    role_title = COALESCE($4, role_title),
                    job_description = COALESCE($5, job_description),
                    start_date = COALESCE($6, start_date),
                    end_date = COALESCE($7, end_date)
                WHERE id = $1 AND user_id = $2
                "#,
            )
            .bind(id)
            .bind(user_id)
            .bind(entry.company.as_deref())
            .bind(entry.role_title.as_deref())
            .bind(entry.job_description.as_deref())
            .bind(entry.start_date)
            .bind(entry.end_date)
            .execute(&mut *conn)
            .await?;
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO work_experiences
                    (user_id, company, role_title, job_description, start_date, end_date)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user_id)
            .bind(entry.company.as_deref())
            .bind(entry.role_title.as_deref())
            .bind(entry.job_description.as_deref())
            .bind(entry.start_date)
            .bind(entry.end_date)
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(())
}

async fn save_license(
    conn: &mut PgConnection,
    user_id: i64,
    entry: &LicenseUpdate,
) -> RepoResult<()> {
    match entry.id {
        Some(id) => {
            sqlx::query(
                r#"
                UPDATE licenses_certifications
                SET
                    name = COALESCE($3, name),
                    issuing_organization = COALESCE($4, issuing_organization),
                    issue_date = COALESCE($5, issue_date),
                    expiration_date = COALESCE($6, expiration_date),
                    credentials_id = COALESCE($7, credentials_id),
                    credential_url = COALESCE($8, credential_url)
                WHERE id = $1 AND user_id = $2
                "#,
            )
            .bind(id)
            .bind(user_id)
            .bind(entry.name.as_deref())
            .bind(entry.issuing_organization.as_deref())
            .bind(entry.issue_date)
            .bind(entry.expiration_date)
            .bind(entry.credentials_id.as_deref())
            .bind(entry.credential_url.as_deref())
            .execute(&mut *conn)
            .await?;
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO licenses_certifications
                    (user_id, name, issuing_organization, issue_date, expiration_date,
                     credentials_id, credential_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(user_id)
            .bind(entry.name.as_deref())
            .bind(entry.issuing_organization.as_deref())
            .bind(entry.issue_date)
            .bind(entry.expiration_date)
            .bind(entry.credentials_id.as_deref())
            .bind(entry.credential_url.as_deref())
            .execute(&mut *conn)
            .await?;
        }
    }

    Ok(())
}
