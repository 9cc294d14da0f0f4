//! Endpoint paths for the TVMaze API.

/// Production API root. Overridable through
/// [`ClientConfig`](crate::ClientConfig) so tests can point the client at a
/// mock server.
pub const BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show-search path for a query.
///
/// URL encodes the query and appends it as the `q` parameter.
///
/// # Example
/// ```
/// use tvscout_core::url::search_path;
/// assert_eq!(search_path("doctor who"), "/search/shows?q=doctor%20who");
/// ```
pub fn search_path(query: &str) -> String {
    format!("/search/shows?q={}", urlencoding::encode(query))
}

/// Builds the episode-listing path for a show id.
///
/// # Example
/// ```
/// use tvscout_core::url::episodes_path;
/// assert_eq!(episodes_path(82), "/shows/82/episodes");
/// ```
pub fn episodes_path(show_id: u64) -> String {
    format!("/shows/{}/episodes", show_id)
}
