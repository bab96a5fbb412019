use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{middleware::RequestId, models::Movie, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: String,
}

/// Handler for free-text movie search
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Movie>> {
    let results = state.index.search(&params.query);

    tracing::info!(
        request_id = %request_id,
        query = %params.query,
        result_count = results.len(),
        "Search completed"
    );

    Json(results)
}
