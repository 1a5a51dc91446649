//! Rust models matching the database schema.

use chrono::{DateTime, Utc};
use movienight_common::MovieId;
use serde::{Deserialize, Serialize};

/// A persisted catalog entry.
///
/// Serialized with camelCase keys (`posterUrl`, `createdAt`), which is the
/// shape the browser client consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
    pub poster_url: String,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
    pub poster_url: String,
}
