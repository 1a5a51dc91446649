//! Movie catalog API routes.
//!
//! List, add, random pick and delete. Handlers are thin: they translate
//! between JSON and [`CatalogService`](crate::catalog::CatalogService) calls
//! and let [`AppError`] shape every failure.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use movienight_db::models::Movie;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::AppError;
use super::AppContext;
use crate::catalog::AddMovieRequest;

/// Create movie routes.
pub fn movie_routes() -> Router<AppContext> {
    Router::new()
        .route("/movies", get(list_movies).post(add_movie))
        .route("/movies/random", get(random_movie))
        .route("/movies/:id", delete(delete_movie))
}

// ============================================================================
// Request/Response types
// ============================================================================

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    /// Unique movie identifier
    pub id: String,
    /// Movie title
    pub title: String,
    /// Genre label
    pub genre: String,
    /// Rating
    pub rating: f64,
    /// Release year
    pub year: i32,
    /// Poster image URL, or the placeholder when none was found
    pub poster_url: String,
    /// When the movie was added
    pub created_at: String,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title,
            genre: movie.genre,
            rating: movie.rating,
            year: movie.year,
            poster_url: movie.poster_url,
            created_at: movie.created_at.to_rfc3339(),
        }
    }
}

/// Confirmation returned after a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by every failing movie route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all movies in insertion order.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies", body = Vec<MovieResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_movies(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let movies = ctx.catalog.list()?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Add a movie. The poster is looked up by title before the record is stored.
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movies",
    request_body = AddMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_movie(
    State(ctx): State<AppContext>,
    payload: Result<Json<AddMovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), AppError> {
    let Json(request) = payload?;
    let movie = ctx.catalog.add(&request).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

/// Pick one movie at random. Responds with `null` when the catalog is empty.
#[utoipa::path(
    get,
    path = "/api/movies/random",
    tag = "movies",
    responses(
        (status = 200, description = "A random movie, or null", body = Option<MovieResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn random_movie(
    State(ctx): State<AppContext>,
) -> Result<Json<Option<MovieResponse>>, AppError> {
    let movie = ctx.catalog.random()?;
    Ok(Json(movie.map(MovieResponse::from)))
}

/// Delete a movie by identifier.
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    tag = "movies",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    ctx.catalog.delete(&id)?;
    Ok(Json(MessageResponse {
        message: "Movie deleted".to_string(),
    }))
}
