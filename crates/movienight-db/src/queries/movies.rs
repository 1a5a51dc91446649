//! Movie database queries.
//!
//! Records come back in insertion order (SQLite rowid), which is the order
//! both [`list_movies`] and [`get_movie_at_offset`] use.

use chrono::{DateTime, Utc};
use movienight_common::{Error, MovieId, Result};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::models::{Movie, NewMovie};

const MOVIE_COLUMNS: &str = "id, title, genre, rating, year, poster_url, created_at";

fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
    let id: String = row.get(0)?;
    let id = id
        .parse::<MovieId>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    let created_at: String = row.get(6)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Movie {
        id,
        title: row.get(1)?,
        genre: row.get(2)?,
        rating: row.get(3)?,
        year: row.get(4)?,
        poster_url: row.get(5)?,
        created_at,
    })
}

/// Insert a new movie and return the stored record.
///
/// The identifier and creation time are assigned here.
pub fn insert_movie(conn: &Connection, movie: &NewMovie) -> Result<Movie> {
    let id = MovieId::new();
    let created_at = Utc::now();

    conn.execute(
        "INSERT INTO movies (id, title, genre, rating, year, poster_url, created_at)
         VALUES (:id, :title, :genre, :rating, :year, :poster_url, :created_at)",
        rusqlite::named_params! {
            ":id": id.to_string(),
            ":title": movie.title,
            ":genre": movie.genre,
            ":rating": movie.rating,
            ":year": movie.year,
            ":poster_url": movie.poster_url,
            ":created_at": created_at.to_rfc3339(),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Movie {
        id,
        title: movie.title.clone(),
        genre: movie.genre.clone(),
        rating: movie.rating,
        year: movie.year,
        poster_url: movie.poster_url.clone(),
        created_at,
    })
}

/// Get a movie by ID.
///
/// # Returns
///
/// * `Ok(Some(Movie))` - The movie if found
/// * `Ok(None)` - If the movie does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_movie(conn: &Connection, id: MovieId) -> Result<Option<Movie>> {
    conn.query_row(
        &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = :id"),
        rusqlite::named_params! { ":id": id.to_string() },
        row_to_movie,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// List all movies in insertion order.
pub fn list_movies(conn: &Connection) -> Result<Vec<Movie>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY rowid"))
        .map_err(|e| Error::database(e.to_string()))?;

    let movies = stmt
        .query_map([], row_to_movie)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(movies)
}

/// Count stored movies.
pub fn count_movies(conn: &Connection) -> Result<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(count as u64)
}

/// Fetch the movie at a zero-based position in insertion order.
///
/// Returns `Ok(None)` when `offset` is past the end.
pub fn get_movie_at_offset(conn: &Connection, offset: u64) -> Result<Option<Movie>> {
    let offset = i64::try_from(offset).map_err(|e| Error::internal(e.to_string()))?;

    conn.query_row(
        &format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY rowid LIMIT 1 OFFSET :offset"),
        rusqlite::named_params! { ":offset": offset },
        row_to_movie,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Delete a movie.
///
/// # Returns
///
/// * `Ok(true)` - If the movie was deleted
/// * `Ok(false)` - If the movie did not exist
/// * `Err(Error)` - If a database error occurs
pub fn delete_movie(conn: &Connection, id: MovieId) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM movies WHERE id = :id",
            rusqlite::named_params! { ":id": id.to_string() },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}
