//! Catalog operations: list, add, random pick, delete.
//!
//! The service holds no state of its own between calls; everything lives in
//! the [`MovieStore`]. Adding a movie makes exactly one poster lookup.

use std::sync::Arc;

use movienight_common::{Error, MovieId, Result};
use movienight_db::models::{Movie, NewMovie};
use rand::Rng;
use tracing::{debug, info};

use super::request::AddMovieRequest;
use super::store::MovieStore;
use crate::poster::PosterLookup;

/// Catalog service shared by request handlers.
///
/// Cheap to clone; both collaborators are behind `Arc`s.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn MovieStore>,
    posters: Arc<dyn PosterLookup>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn MovieStore>, posters: Arc<dyn PosterLookup>) -> Self {
        Self { store, posters }
    }

    /// Every movie, in insertion order.
    pub fn list(&self) -> Result<Vec<Movie>> {
        self.store.find_all()
    }

    pub fn count(&self) -> Result<u64> {
        self.store.count()
    }

    /// Validate, look up a poster, then store.
    ///
    /// Nothing is stored when validation fails, and the poster service is not
    /// contacted.
    pub async fn add(&self, request: &AddMovieRequest) -> Result<Movie> {
        let valid = request.validate()?;

        let poster_url = self.posters.fetch_poster_url(&valid.title).await;

        let movie = self.store.insert(&NewMovie {
            title: valid.title,
            genre: valid.genre,
            rating: valid.rating,
            year: valid.year,
            poster_url,
        })?;

        info!(id = %movie.id, title = %movie.title, "Movie added");
        Ok(movie)
    }

    /// Pick one movie uniformly at random, or `None` if the catalog is empty.
    pub fn random(&self) -> Result<Option<Movie>> {
        self.random_with(&mut rand::thread_rng())
    }

    /// [`random`](Self::random) with a caller-supplied generator.
    ///
    /// Count and fetch are two separate store calls. A delete landing between
    /// them can make the fetch come back empty, which is reported as `None`.
    pub fn random_with<R: Rng>(&self, rng: &mut R) -> Result<Option<Movie>> {
        let count = self.store.count()?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rng.gen_range(0..count);
        let movie = self.store.find_at_offset(offset)?;
        if movie.is_none() {
            debug!(offset, count, "Random pick raced with a delete");
        }
        Ok(movie)
    }

    /// Remove a movie by identifier.
    ///
    /// Identifiers that are not valid UUIDs cannot name a stored movie and
    /// are reported as not found.
    pub fn delete(&self, id: &str) -> Result<()> {
        let not_found = || Error::not_found(format!("movie {id}"));

        let movie_id: MovieId = id.trim().parse().map_err(|_| not_found())?;

        if !self.store.delete_by_id(movie_id)? {
            return Err(not_found());
        }

        info!(id = %movie_id, "Movie deleted");
        Ok(())
    }
}
