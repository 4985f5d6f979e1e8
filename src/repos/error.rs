/*
 * Responsibility
 * - Define what the repo layer tells the layers above
 */
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const STRING_TOO_LONG: &str = "22001";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[source] sqlx::Error),
    #[error("conflict")]
    Conflict,
    #[error("missing reference")]
    MissingReference,
    #[error("value too long")]
    ValueTooLong,
}

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e {
            match dbe.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return RepoError::Conflict,
                Some(FOREIGN_KEY_VIOLATION) => return RepoError::MissingReference,
                Some(STRING_TOO_LONG) => return RepoError::ValueTooLong,
                _ => {}
            }
        }
        RepoError::Db(e)
    }
}

// `?` on a raw sqlx error classifies it too.
impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        RepoError::from_sqlx(e)
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
