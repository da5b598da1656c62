use thiserror::Error;

use crate::storage::{repository_error_to_status_code, RepositoryError};
use crate::validation::ValidationError;

/// Any failure of a public operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl ApiError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Store(error) => repository_error_to_status_code(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_400_with_message() {
        let error = ApiError::from(ValidationError::new("Missing required parameter: userId"));
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Missing required parameter: userId");
    }

    #[test]
    fn test_store_is_500_with_message() {
        let error = ApiError::from(RepositoryError::WriteFailed("item too large".to_string()));
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.to_string(), "Write failed: item too large");
    }
}
