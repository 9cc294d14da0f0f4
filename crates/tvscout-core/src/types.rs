//! Domain types shared by the library and its frontends.

use serde::{Deserialize, Serialize};

/// One television series as returned by a show search.
///
/// Produced by [`TvMaze::search_shows`](crate::TvMaze::search_shows) and
/// never mutated afterwards; a new search replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show id
    pub id: u64,

    /// Show title
    pub name: String,

    /// Blurb from the API. May contain embedded markup; passed through
    /// exactly as the API sent it.
    pub summary: String,

    /// Medium-size poster URL, absent for shows without artwork
    pub image_url: Option<String>,
}

/// One episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode id
    pub id: u64,

    /// Episode title
    pub name: String,

    /// Season the episode belongs to
    pub season: u32,

    /// Position within the season
    pub number: u32,
}
