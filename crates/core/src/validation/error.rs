use thiserror::Error;

/// Client input failed a schema or format check.
///
/// Carries the message reported to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefixes the message the way body validation failures are reported.
    pub fn in_body(self) -> Self {
        Self::new(format!("Validation error: {}", self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new("\"title\" is required");
        assert_eq!(error.to_string(), "\"title\" is required");
    }

    #[test]
    fn test_in_body_prefix() {
        let error = ValidationError::new("\"title\" is required").in_body();
        assert_eq!(error.message, "Validation error: \"title\" is required");
    }
}
