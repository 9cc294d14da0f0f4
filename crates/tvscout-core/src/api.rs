//! High-level API for TVMaze.
//!
//! Combines the HTTP client, the endpoint paths, and the wire types into
//! the two operations the frontends consume.

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::{Result, TvMazeError};
use crate::types::{Episode, Show};
use crate::url::{episodes_path, search_path};
use crate::wire::{SearchHit, WireEpisode};

/// Typed facade over the TVMaze search and episode endpoints.
///
/// Both operations perform one GET and return a typed result; presentation
/// is left entirely to the caller.
pub struct TvMaze {
    client: TvMazeClient,
}

impl TvMaze {
    /// Create a facade against the production API.
    ///
    /// # Errors
    /// Returns an error if HTTP client initialization fails.
    pub fn new() -> Result<Self> {
        let client = TvMazeClient::new()?;
        Ok(Self { client })
    }

    /// Create a facade with a custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for shows matching `query`.
    ///
    /// Returns the matches exactly as the endpoint provided them, in the
    /// order provided.
    ///
    /// # Errors
    /// - [`TvMazeError::EmptyQuery`] if `query` is empty or whitespace only
    /// - [`TvMazeError::NoResults`] if the endpoint returned zero matches;
    ///   the message carries the original query text
    /// - [`TvMazeError::Http`] if the request itself fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tvscout_core::Result<()> {
    /// use tvscout_core::TvMaze;
    /// let api = TvMaze::new()?;
    /// for show in api.search_shows("batman").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, query: &str) -> Result<Vec<Show>> {
        if query.trim().is_empty() {
            return Err(TvMazeError::EmptyQuery);
        }

        let hits: Vec<SearchHit> = self.client.get_json(&search_path(query)).await?;

        if hits.is_empty() {
            return Err(TvMazeError::NoResults {
                query: query.to_string(),
            });
        }

        Ok(hits.into_iter().map(Show::from).collect())
    }

    /// Fetch the full episode list for a show.
    ///
    /// The list comes back in server order (season-major, number-minor) and
    /// is not re-sorted. An empty list is a valid, non-error result.
    ///
    /// # Errors
    /// [`TvMazeError::Http`] if the request fails.
    pub async fn episodes(&self, show_id: u64) -> Result<Vec<Episode>> {
        let episodes: Vec<WireEpisode> = self.client.get_json(&episodes_path(show_id)).await?;
        Ok(episodes.into_iter().map(Episode::from).collect())
    }
}
