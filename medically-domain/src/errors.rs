use medically_data::repository::RepositoryError;
use thiserror::Error;

/// Errors surfaced by the domain services.
///
/// Every variant carries the message that ends up in the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request is inconsistent and was not sent to the store
    #[error("{0}")]
    InvalidInput(String),

    /// The store rejected the write
    #[error("{0}")]
    ConstraintViolation(String),

    /// The store could not be reached
    #[error("{0}")]
    Unavailable(String),

    /// Any other store failure
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) => ServiceError::ConstraintViolation(msg),
            RepositoryError::Unavailable(msg) => ServiceError::Unavailable(msg),
            RepositoryError::Unknown(msg) => ServiceError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_keep_their_message() {
        let cases = vec![
            (RepositoryError::NotFound("gone".into()), ServiceError::NotFound("gone".into())),
            (
                RepositoryError::ConstraintViolation("NOT NULL constraint failed: users.name".into()),
                ServiceError::ConstraintViolation("NOT NULL constraint failed: users.name".into()),
            ),
            (RepositoryError::Unavailable("pool timed out".into()), ServiceError::Unavailable("pool timed out".into())),
            (RepositoryError::Unknown("boom".into()), ServiceError::Internal("boom".into())),
        ];

        for (repo, expected) in cases {
            let message = repo.to_string();
            let mapped = ServiceError::from(repo);
            assert_eq!(mapped, expected);
            assert_eq!(mapped.to_string(), message);
        }
    }
}
