//! The movie catalog: validation, poster enrichment, and store access.
//!
//! - [`request`] -- Add-movie input and its validation.
//! - [`store`] -- The [`MovieStore`] persistence trait and its SQLite implementation.
//! - [`service`] -- [`CatalogService`], the operations the HTTP API exposes.

pub mod request;
pub mod service;
pub mod store;

pub use request::{AddMovieRequest, NumberInput, ValidMovie};
pub use service::CatalogService;
pub use store::{MovieStore, SqliteMovieStore};
