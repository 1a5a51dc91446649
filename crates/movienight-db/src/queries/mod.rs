//! Database query modules.
//!
//! - movies: Movie record CRUD and offset lookups for random selection

pub mod movies;
