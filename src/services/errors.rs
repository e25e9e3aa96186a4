use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the lead services.
///
/// Routes answer `Validation` and `Internal` with 400 and `NotFound` with 404.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Lead not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(_) | RepositoryError::ConstraintViolation(_) => {
                ServiceError::Validation(err.to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_are_classified() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConstraintViolation("dup".into())),
            ServiceError::Validation(msg) if msg == "dup"
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConnectionError("down".into())),
            ServiceError::Internal(msg) if msg == "Connection error: down"
        ));
    }
}
