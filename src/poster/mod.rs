//! Poster lookup for new catalog entries.
//!
//! A [`PosterLookup`] turns a movie title into an image URL. Lookups never
//! fail from the caller's point of view: every failure path degrades to the
//! configured placeholder so a movie can always be stored.
//!
//! # Module layout
//!
//! - [`omdb`] -- OMDb (Open Movie Database) implementation.

pub mod omdb;

use async_trait::async_trait;

pub use omdb::OmdbClient;

/// Default OMDb API endpoint.
pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// Image shown for movies without a usable poster.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Resolves a title to a poster image URL.
///
/// Implementations are shared across request handlers behind an `Arc`.
#[async_trait]
pub trait PosterLookup: Send + Sync {
    /// Return a poster URL for `title`, or the placeholder when none is
    /// available. Never empty.
    async fn fetch_poster_url(&self, title: &str) -> String;
}
