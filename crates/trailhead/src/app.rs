use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use trailhead_core::response::ApiResponse;

use crate::{
    config::Config,
    handlers::{
        articles::{create_article, list_articles},
        campsites::{create_campsite, list_campsites},
        fallback::fallback,
        favorites::{add_favorite, list_favorites, remove_favorite},
        featured::featured,
        parks::{create_park, list_parks},
        JsonResponse,
    },
    state::AppState,
};

/// CORS policy from configuration; no configured origins allows any origin.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Gives the timeout layer's empty 408 the JSON error envelope.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request timed out");
    JsonResponse(ApiResponse::error(
        "Request timed out",
        StatusCode::REQUEST_TIMEOUT.as_u16(),
    ))
    .into_response()
}

/// Create the application router with all routes and middleware.
///
/// A method a route does not serve falls through to the same catch-all as an
/// unknown path.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/parks", get(list_parks).post(create_park).fallback(fallback))
        .route(
            "/articles",
            get(list_articles).post(create_article).fallback(fallback),
        )
        .route("/featured", get(featured).fallback(fallback))
        .route(
            "/campsites",
            get(list_campsites).post(create_campsite).fallback(fallback),
        )
        .route(
            "/favorites",
            get(list_favorites)
                .post(add_favorite)
                .delete(remove_favorite)
                .fallback(fallback),
        )
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(middleware::map_response(timeout_envelope))
        .with_state(state)
}
