use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::AppError;
use crate::server::AppContext;

pub fn api_routes() -> Router<AppContext> {
    Router::new().route("/health", get(health))
}

/// Service health summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" when the store is reachable
    pub status: String,
    /// Server version
    pub version: String,
    /// Number of stored movies
    pub movies: u64,
}

/// Health check that also touches the store.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Store unreachable")
    )
)]
pub async fn health(State(ctx): State<AppContext>) -> Result<Json<HealthResponse>, AppError> {
    let movies = ctx.catalog.count()?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        movies,
    }))
}
