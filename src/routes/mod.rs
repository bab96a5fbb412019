use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    middleware::{make_span_with_request_id, request_id_middleware},
    services::MovieIndex,
};

pub mod movies;
pub mod recommend;
pub mod search;

/// Shared, read-only application state
///
/// The index is fully built before the state exists, so handlers never see a
/// partially initialized catalog.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<MovieIndex>,
}

impl AppState {
    pub fn new(index: MovieIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Creates the application router with all routes
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/movies", get(movies::list_movies))
        .route("/search", get(search::search))
        .route("/recommend", get(recommend::recommend))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// Builds the CORS policy for the configured front-end origin.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard. `*` mirrors any origin.
pub fn cors_layer(config: &Config) -> AppResult<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::very_permissive());
    }

    let origin = HeaderValue::from_str(config.cors_allowed_origin.trim()).map_err(|e| {
        AppError::Config(format!(
            "invalid CORS origin {:?}: {}",
            config.cors_allowed_origin, e
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Greeting endpoint
async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Welcome to the CineMind API!",
    })
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
