use std::collections::HashMap;

use axum::extract::{Query, State};
use trailhead_core::catalog::ParkCodeQuery;

use crate::{
    handlers::{AppError, JsonResponse},
    state::AppState,
};

/// Articles and campgrounds of a park (GET /featured?parkCode=).
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<JsonResponse, AppError> {
    let query = ParkCodeQuery::from_params(&params)?;

    tracing::debug!(park_code = %query.park_code, "Loading featured view");

    let featured = state.catalog.featured(&query).await?;

    tracing::debug!(
        articles = featured.articles.len(),
        campgrounds = featured.campgrounds.len(),
        "Assembled featured view"
    );

    Ok(JsonResponse::ok(&featured))
}
