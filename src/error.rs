/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),
}

impl AppError {
    /// Message returned to clients in place of a recommendation list
    pub const MOVIE_NOT_FOUND: &'static str = "Movie not found";
}

pub type AppResult<T> = Result<T, AppError>;
