use thiserror::Error;

/// Errors raised by repository adapters
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unknown sort property: {property}")]
    InvalidSort { property: String },

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl RepositoryError {
    /// True for errors caused by the caller's query description rather than
    /// by the storage layer
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RepositoryError::InvalidSort { .. } | RepositoryError::InvalidPageRequest(_)
        )
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
