//! Database connection pool management.
//!
//! This module provides connection pooling for SQLite using r2d2.
//! It handles pool initialization and running migrations.

use movienight_common::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::time::Duration;

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a new database pool with the given file path.
///
/// This function will:
/// - Create the SQLite database file if it doesn't exist
/// - Set up connection pooling with r2d2 (4 connections)
/// - Wait up to 5 seconds on a locked database instead of failing
/// - Run pending database migrations
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file
///
/// # Example
///
/// ```no_run
/// use movienight_db::pool::init_pool;
///
/// let pool = init_pool("/var/lib/movienight/movienight.db").unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));

    let pool = Pool::builder()
        .max_size(4)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create connection pool: {}", e)))?;

    migrate(&pool)?;

    Ok(pool)
}

/// Initialize an in-memory database pool for testing.
///
/// Every in-memory SQLite connection is a separate database, so the pool
/// holds exactly one connection. The data is lost when the pool is dropped.
///
/// # Example
///
/// ```
/// use movienight_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory();

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create in-memory pool: {}", e)))?;

    migrate(&pool)?;

    Ok(pool)
}

fn migrate(pool: &DbPool) -> Result<()> {
    let conn = get_conn(pool)?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::database(format!("Failed to run migrations: {}", e)))?;

    Ok(())
}

/// Get a connection from the pool.
///
/// Converts the r2d2 error into the common Error type.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_memory_pool() {
        let pool = init_memory_pool().unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn test_migrations_run_on_init() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='movies'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_pool_reuses_connection() {
        let pool = init_memory_pool().unwrap();

        {
            let conn = get_conn(&pool).unwrap();
            conn.execute(
                "INSERT INTO movies (id, title, genre, rating, year, poster_url)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params!["test-id", "Heat", "Crime", 8.3, 1995, "https://example.com/heat.jpg"],
            )
            .unwrap();
        }

        let conn = get_conn(&pool).unwrap();
        let title: String = conn
            .query_row("SELECT title FROM movies WHERE id = ?", ["test-id"], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(title, "Heat");
    }

    #[test]
    fn test_file_pool_persists_across_pools() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movienight.db");
        let path = path.to_string_lossy();

        {
            let pool = init_pool(&path).unwrap();
            let conn = get_conn(&pool).unwrap();
            conn.execute(
                "INSERT INTO movies (id, title, genre, rating, year, poster_url)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params!["persist-id", "Alien", "Horror", 8.5, 1979, "https://example.com/alien.jpg"],
            )
            .unwrap();
        }

        let pool = init_pool(&path).unwrap();
        let conn = get_conn(&pool).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
