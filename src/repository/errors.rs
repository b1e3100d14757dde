use thiserror::Error;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The query itself failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row does not satisfy the domain constraints.
    #[error("invalid stored data: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
