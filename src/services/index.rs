use std::cmp::Ordering;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::{
        similarity::{pairwise, similarity},
        vectorizer::{TfIdfVectorizer, Vector},
    },
};

/// Search matches must score strictly above this
pub const SEARCH_THRESHOLD: f32 = 0.1;
/// Maximum number of search results
pub const SEARCH_LIMIT: usize = 5;
/// Number of recommendations returned per title
pub const RECOMMEND_LIMIT: usize = 3;

/// Read-only movie index built once at startup.
///
/// Holds the catalog, the fitted vectorizer, one feature vector per movie and
/// the all-pairs similarity matrix, all indexed by catalog position.
#[derive(Debug)]
pub struct MovieIndex {
    movies: Vec<Movie>,
    vectorizer: TfIdfVectorizer,
    vectors: Vec<Vector>,
    similarities: Vec<Vec<f32>>,
}

impl MovieIndex {
    /// Vectorizes the catalog and precomputes pairwise similarities
    pub fn build(movies: Vec<Movie>) -> Self {
        let documents: Vec<String> = movies.iter().map(Movie::document).collect();
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&documents);
        let similarities = pairwise(&vectors);

        tracing::info!(
            movie_count = movies.len(),
            dimensions = vectorizer.dimensions(),
            "Movie index built"
        );

        Self {
            movies,
            vectorizer,
            vectors,
            similarities,
        }
    }

    /// Full catalog in load order
    pub fn list_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Free-text search over titles, genres and descriptions.
    ///
    /// Returns at most [`SEARCH_LIMIT`] movies scoring above
    /// [`SEARCH_THRESHOLD`], best first.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        let query_vector = self.vectorizer.embed(query);
        let scores = similarity(&query_vector, &self.vectors);

        let mut matches: Vec<(usize, f32)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(_, score)| score > SEARCH_THRESHOLD)
            .collect();
        sort_descending(&mut matches);

        matches
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(|(idx, _)| self.movies[idx].clone())
            .collect()
    }

    /// Movies most similar to the first movie titled `title` (case-insensitive).
    ///
    /// The queried movie itself is never part of the result. Ties keep catalog
    /// order.
    pub fn recommend(&self, title: &str) -> AppResult<Vec<Movie>> {
        let position = self
            .movies
            .iter()
            .position(|movie| movie.title_matches(title))
            .ok_or_else(|| AppError::MovieNotFound(title.to_string()))?;

        let mut ranked: Vec<(usize, f32)> = self.similarities[position]
            .iter()
            .copied()
            .enumerate()
            .filter(|&(idx, _)| idx != position)
            .collect();
        sort_descending(&mut ranked);

        Ok(ranked
            .into_iter()
            .take(RECOMMEND_LIMIT)
            .map(|(idx, _)| self.movies[idx].clone())
            .collect())
    }
}

/// Stable sort by score, highest first
fn sort_descending(scored: &mut [(usize, f32)]) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
