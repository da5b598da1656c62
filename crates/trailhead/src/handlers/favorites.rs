use std::collections::HashMap;

use axum::extract::{Query, State};
use trailhead_core::catalog::{AddFavoriteRequest, FavoritesQuery, RemoveFavoriteRequest};
use trailhead_core::response::Items;

use crate::{
    handlers::{AppError, JsonResponse, RequestBody},
    state::AppState,
};

/// List a user's favorites ordered by campground name (GET /favorites?userId=).
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<JsonResponse, AppError> {
    let query = FavoritesQuery::from_params(&params)?;

    tracing::debug!(user_id = %query.user_id, "Listing favorites");

    let items = state.catalog.list_favorites(&query).await?;

    Ok(JsonResponse::ok(&Items::from(items)))
}

/// Add a campground to a user's favorites (POST /favorites).
pub async fn add_favorite(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<JsonResponse, AppError> {
    let request = AddFavoriteRequest::from_body(Some(&body))?;

    state.catalog.add_favorite(&request).await?;

    tracing::info!(
        user_id = %request.user_id,
        campground_id = %request.campground_id,
        "Added favorite"
    );

    Ok(JsonResponse::success())
}

/// Remove a campground from a user's favorites (DELETE /favorites).
///
/// Succeeds whether or not the favorite existed.
pub async fn remove_favorite(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<JsonResponse, AppError> {
    let request = RemoveFavoriteRequest::from_body(Some(&body))?;

    state.catalog.remove_favorite(&request).await?;

    tracing::info!(
        user_id = %request.user_id,
        campground_id = %request.campground_id,
        "Removed favorite"
    );

    Ok(JsonResponse::success())
}
