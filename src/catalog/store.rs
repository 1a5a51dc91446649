//! Persistence boundary for the catalog.
//!
//! [`MovieStore`] is the narrow interface the service needs from storage;
//! [`SqliteMovieStore`] implements it on top of the `movienight-db` query
//! functions, taking a pooled connection per call.

use movienight_common::{MovieId, Result};
use movienight_db::models::{Movie, NewMovie};
use movienight_db::pool::{get_conn, DbPool};
use movienight_db::queries::movies;

/// Storage operations used by the catalog service.
pub trait MovieStore: Send + Sync {
    /// Persist a record and return it with its assigned identifier.
    /// Durable before it returns.
    fn insert(&self, movie: &NewMovie) -> Result<Movie>;

    /// All records in insertion order.
    fn find_all(&self) -> Result<Vec<Movie>>;

    fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    fn count(&self) -> Result<u64>;

    /// Record at a zero-based position in insertion order.
    fn find_at_offset(&self, offset: u64) -> Result<Option<Movie>>;

    /// Returns whether a record was removed.
    fn delete_by_id(&self, id: MovieId) -> Result<bool>;
}

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteMovieStore {
    pool: DbPool,
}

impl SqliteMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MovieStore for SqliteMovieStore {
    fn insert(&self, movie: &NewMovie) -> Result<Movie> {
        let conn = get_conn(&self.pool)?;
        movies::insert_movie(&conn, movie)
    }

    fn find_all(&self) -> Result<Vec<Movie>> {
        let conn = get_conn(&self.pool)?;
        movies::list_movies(&conn)
    }

    fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let conn = get_conn(&self.pool)?;
        movies::get_movie(&conn, id)
    }

    fn count(&self) -> Result<u64> {
        let conn = get_conn(&self.pool)?;
        movies::count_movies(&conn)
    }

    fn find_at_offset(&self, offset: u64) -> Result<Option<Movie>> {
        let conn = get_conn(&self.pool)?;
        movies::get_movie_at_offset(&conn, offset)
    }

    fn delete_by_id(&self, id: MovieId) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        movies::delete_movie(&conn, id)
    }
}
