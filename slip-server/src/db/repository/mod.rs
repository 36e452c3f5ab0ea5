//! Repository layer
//!
//! Free functions over `&SqlitePool`, one module per aggregate.
//! All repository functions return [`RepoResult`] and never touch HTTP
//! concerns.

pub mod product;
pub mod slip;
pub mod slip_format;

/// Repository-level error
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("database: {0}")]
    Database(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}
