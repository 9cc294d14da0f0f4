//! Serde mirror of the TVMaze JSON payloads.
//!
//! The API wraps every search match in an envelope with a nested `show`
//! object and reports missing artwork and blurbs as `null`. Those quirks
//! stay here; the rest of the crate only sees [`Show`] and [`Episode`].

use serde::Deserialize;

use crate::types::{Episode, Show};

/// One element of the `/search/shows` response array.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub show: WireShow,
}

/// The nested show object inside a search hit.
#[derive(Debug, Deserialize)]
pub(crate) struct WireShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<WireImage>,
}

/// Artwork links for a show.
#[derive(Debug, Deserialize)]
pub(crate) struct WireImage {
    pub medium: String,
}

/// One element of the `/shows/{id}/episodes` response array.
#[derive(Debug, Deserialize)]
pub(crate) struct WireEpisode {
    pub id: u64,
    pub name: String,
    pub season: u32,
    pub number: u32,
}

impl From<SearchHit> for Show {
    fn from(hit: SearchHit) -> Self {
        let WireShow {
            id,
            name,
            summary,
            image,
        } = hit.show;

        Show {
            id,
            name,
            summary: summary.unwrap_or_default(),
            image_url: image.map(|image| image.medium),
        }
    }
}

impl From<WireEpisode> for Episode {
    fn from(episode: WireEpisode) -> Self {
        Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        }
    }
}
