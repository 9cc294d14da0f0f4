//! Error types for TVMaze operations.

use thiserror::Error;

/// Error type for all TVMaze operations.
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// The underlying HTTP round trip failed: connectivity, a non-2xx
    /// status, or a payload that did not decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A search returned zero matches.
    #[error("no shows found for \"{query}\"")]
    NoResults {
        /// The query text the search was issued with
        query: String,
    },

    /// A blank query was handed to the search API.
    #[error("search query cannot be empty")]
    EmptyQuery,
}

/// Result type alias for TVMaze operations.
pub type Result<T> = std::result::Result<T, TvMazeError>;
