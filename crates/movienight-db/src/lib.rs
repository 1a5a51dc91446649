//! Movienight-DB: Database schema, migrations, and query operations
//!
//! This crate is the catalog store for movienight, backed by SQLite
//! with rusqlite and r2d2 connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use movienight_db::models::NewMovie;
//! use movienight_db::pool::{init_pool, get_conn};
//! use movienight_db::queries::movies;
//!
//! let pool = init_pool("/var/lib/movienight/movienight.db").unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let movie = movies::insert_movie(&conn, &NewMovie {
//!     title: "Inception".into(),
//!     genre: "Sci-Fi".into(),
//!     rating: 8.8,
//!     year: 2010,
//!     poster_url: "https://example.com/inception.jpg".into(),
//! })
//! .unwrap();
//! println!("Created movie: {}", movie.id);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
