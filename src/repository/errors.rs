use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row failed domain validation on the way out.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::Validation(err.to_string())
    }
}

/// Convenient alias for results returned from repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
