//! Movienight-Common: Shared types and error handling.
//!
//! This crate provides functionality used by both the database layer and the
//! server:
//!
//! - **Typed IDs**: A UUID wrapper for movie identifiers
//! - **Error Handling**: The common error type and result alias
//!
//! # Examples
//!
//! ```
//! use movienight_common::{Error, MovieId, Result};
//!
//! let id = MovieId::new();
//!
//! fn example(id: MovieId) -> Result<()> {
//!     Err(Error::not_found(format!("movie {id}")))
//! }
//! assert!(example(id).is_err());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
