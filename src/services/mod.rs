use thiserror::Error;

use crate::api::ApiError;
use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod collector;
pub mod formatter;
pub mod output;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// The API payload could not be mapped to a domain entity.
    #[error("mapping error: {0}")]
    Mapping(#[from] TypeConstraintError),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
