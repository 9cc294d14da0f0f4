//! TVMaze Client Core Library
//!
//! Provides a typed async API for searching TV shows and listing their
//! episodes via the public TVMaze API.
//!
//! # Overview
//!
//! This crate wraps the two TVMaze endpoints the tvscout frontends consume:
//! - `/search/shows?q=...` for show search
//! - `/shows/{id}/episodes` for per-show episode listings
//!
//! Both operations return typed results; how successes and failures are
//! presented is entirely up to the caller. A search that matches nothing is
//! an error ([`TvMazeError::NoResults`]) carrying the original query, while
//! a show with zero episodes is an ordinary empty list.
//!
//! # Example
//!
//! ```no_run
//! use tvscout_core::{Result, TvMaze};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = TvMaze::new()?;
//!
//!     // Search for shows
//!     let shows = api.search_shows("batman").await?;
//!     for show in &shows {
//!         println!("{}: {}", show.id, show.name);
//!     }
//!
//!     // List episodes for the first match
//!     if let Some(show) = shows.first() {
//!         for episode in api.episodes(show.id).await? {
//!             println!("S{:02}E{:02} {}", episode.season, episode.number, episode.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod types;
pub mod url;
mod wire;

// Re-export the main API
pub use api::TvMaze;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{Result, TvMazeError};

// Re-export data types
pub use types::{Episode, Show};
