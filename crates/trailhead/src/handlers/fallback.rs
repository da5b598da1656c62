use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Catch-all for unmatched routes and methods.
///
/// OPTIONS answers 200 with an empty body; anything else is a plaintext 404.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    tracing::debug!(%method, %uri, "No route matched");
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
