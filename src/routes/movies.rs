use axum::{extract::State, Json};

use crate::{models::Movie, routes::AppState};

/// Handler for the full catalog
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.index.list_movies().to_vec())
}
