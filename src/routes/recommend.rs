use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, middleware::RequestId, models::Movie, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    title: String,
}

/// Either a list of recommendations or a not-found marker, both served as 200
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Movies(Vec<Movie>),
    Error { error: String },
}

/// Handler for title-based recommendations
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendQuery>,
) -> Json<RecommendResponse> {
    match state.index.recommend(&params.title) {
        Ok(movies) => {
            tracing::info!(
                request_id = %request_id,
                title = %params.title,
                result_count = movies.len(),
                "Recommendations generated"
            );
            Json(RecommendResponse::Movies(movies))
        }
        Err(e) => {
            tracing::info!(request_id = %request_id, error = %e, "Recommendation lookup failed");
            Json(RecommendResponse::Error {
                error: AppError::MOVIE_NOT_FOUND.to_string(),
            })
        }
    }
}
