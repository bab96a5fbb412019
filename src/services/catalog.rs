use std::collections::HashSet;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Reads and validates the movie catalog from a JSON file
///
/// The whole file must parse as an array of movies; a single malformed entry
/// fails the load so the server never starts with a partial catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Vec<Movie>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::CatalogIo {
        path: path.display().to_string(),
        source,
    })?;

    let movies = parse_catalog(&raw)?;

    tracing::info!(
        path = %path.display(),
        movie_count = movies.len(),
        "Catalog loaded"
    );

    Ok(movies)
}

/// Parses catalog JSON and checks each entry
pub fn parse_catalog(raw: &str) -> AppResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(raw)?;
    validate(&movies)?;
    Ok(movies)
}

fn validate(movies: &[Movie]) -> AppResult<()> {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();

    for movie in movies {
        if !ids.insert(movie.id) {
            return Err(AppError::InvalidCatalog(format!(
                "duplicate movie id {}",
                movie.id
            )));
        }
        if movie.title.trim().is_empty() {
            return Err(AppError::InvalidCatalog(format!(
                "movie {} has an empty title",
                movie.id
            )));
        }
        // Recommendation lookup takes the first match, so later duplicates are unreachable by title
        if !titles.insert(movie.title.to_lowercase()) {
            tracing::warn!(
                id = movie.id,
                title = %movie.title,
                "Duplicate title in catalog; lookups by title resolve to the earlier entry"
            );
        }
    }

    if movies.is_empty() {
        tracing::warn!("Catalog is empty");
    }

    Ok(())
}
