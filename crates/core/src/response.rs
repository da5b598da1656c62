//! Response formatting.
//!
//! Every response body is serialized JSON, including failures, which carry
//! `{"message": "<text>"}`.

use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;
use crate::storage::Item;

/// Body of the single-collection list operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Items {
    pub items: Vec<Item>,
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// A status code and a serialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 with the serialized payload.
    ///
    /// A payload that fails to serialize becomes a 500 envelope.
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(e) => Self::error(&e.to_string(), 500),
        }
    }

    /// 200 acknowledging a write.
    pub fn success() -> Self {
        Self::ok(&json!({ "message": "Success" }))
    }

    /// The error envelope with the given status.
    pub fn error(message: &str, status_code: u16) -> Self {
        Self {
            status_code,
            body: json!({ "message": message }).to_string(),
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        Self::error(&error.to_string(), error.status_code())
    }
}

impl<T: Serialize> From<Result<T, ApiError>> for ApiResponse {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => Self::ok(&payload),
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;
    use crate::validation::ValidationError;
    use serde_json::Value;

    fn body(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_ok_items() {
        let response = ApiResponse::ok(&Items::default());
        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response), json!({"items": []}));
    }

    #[test]
    fn test_success_message() {
        let response = ApiResponse::success();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"Success"}"#);
    }

    #[test]
    fn test_error_body_is_valid_json() {
        let response = ApiResponse::error("quote \" and <tag>", 400);
        assert_eq!(body(&response), json!({"message": "quote \" and <tag>"}));
    }

    #[test]
    fn test_from_api_errors() {
        let response = ApiResponse::from(ApiError::from(ValidationError::new(
            "Validation error: \"id\" is required",
        )));
        assert_eq!(response.status_code, 400);
        assert_eq!(
            body(&response),
            json!({"message": "Validation error: \"id\" is required"})
        );

        let response =
            ApiResponse::from(ApiError::from(RepositoryError::QueryFailed("boom".to_string())));
        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response), json!({"message": "Query failed: boom"}));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<Items, ApiError> = Ok(Items::default());
        assert_eq!(ApiResponse::from(ok).status_code, 200);
    }
}
