//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Store failures are never distinguished from one another at the boundary:
//! every variant is an internal failure.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// # Examples
///
/// ```
/// use trailhead_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::QueryFailed("DynamoDB internal server error".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 500);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::WriteFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
