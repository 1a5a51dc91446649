//! OpenAPI documentation and Swagger UI integration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::AppContext;

/// OpenAPI documentation for the movie night API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Night API",
        version = "0.1.0",
        description = "Shared movie catalog with poster lookup and random picks",
    ),
    servers(
        (url = "/", description = "Default server")
    ),
    paths(
        super::routes_api::health,
        super::routes_movies::list_movies,
        super::routes_movies::add_movie,
        super::routes_movies::random_movie,
        super::routes_movies::delete_movie,
    ),
    components(
        schemas(
            super::routes_api::HealthResponse,
            crate::catalog::AddMovieRequest,
            super::routes_movies::MovieResponse,
            super::routes_movies::MessageResponse,
            super::routes_movies::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "movies", description = "Movie catalog endpoints"),
    )
)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes.
/// - `/docs` - Swagger UI
/// - `/openapi.json` - Raw OpenAPI JSON document (served by SwaggerUi)
pub fn openapi_routes() -> Router<AppContext> {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_movie_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/movies"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/movies/random"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/movies/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/health"));
    }
}
