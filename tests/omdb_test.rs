//! OMDb poster lookup tests against a mocked API.

mod common;

use std::sync::Arc;

use common::TestHarness;
use movienight::catalog::AddMovieRequest;
use movienight::poster::{OmdbClient, PosterLookup, PLACEHOLDER_POSTER_URL};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTER: &str = "https://m.media-amazon.com/images/M/inception.jpg";

fn client(server: &MockServer) -> OmdbClient {
    OmdbClient::new(Some("test-key".into()), server.uri(), PLACEHOLDER_POSTER_URL)
}

#[tokio::test]
async fn returns_poster_from_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("t", "Inception"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "Inception",
            "Year": "2010",
            "Poster": POSTER,
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client(&server).fetch_poster_url("Inception").await, POSTER);
}

#[tokio::test]
async fn title_with_spaces_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("t", "The Good, the Bad & the Ugly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Poster": POSTER,
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        client(&server)
            .fetch_poster_url("The Good, the Bad & the Ugly")
            .await,
        POSTER
    );
}

#[tokio::test]
async fn not_available_sentinel_gives_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "Obscure Short",
            "Poster": "N/A",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    assert_eq!(
        client(&server).fetch_poster_url("Obscure Short").await,
        PLACEHOLDER_POSTER_URL
    );
}

#[tokio::test]
async fn unknown_movie_gives_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    assert_eq!(
        client(&server).fetch_poster_url("Not A Real Film").await,
        PLACEHOLDER_POSTER_URL
    );
}

#[tokio::test]
async fn error_status_gives_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Response": "False",
            "Error": "Invalid API key!"
        })))
        .mount(&server)
        .await;

    assert_eq!(
        client(&server).fetch_poster_url("Inception").await,
        PLACEHOLDER_POSTER_URL
    );
}

#[tokio::test]
async fn malformed_body_gives_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert_eq!(
        client(&server).fetch_poster_url("Inception").await,
        PLACEHOLDER_POSTER_URL
    );
}

#[tokio::test]
async fn each_lookup_hits_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Poster": POSTER,
            "Response": "True"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.fetch_poster_url("Heat").await;
    client.fetch_poster_url("Heat").await;
}

#[tokio::test]
async fn add_succeeds_with_placeholder_when_api_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let harness = TestHarness::with_posters(Arc::new(client(&server)));

    let movie = harness
        .ctx
        .catalog
        .add(&AddMovieRequest::new("Inception", "Sci-Fi", 8.8, 2010.0))
        .await
        .unwrap();

    assert_eq!(movie.poster_url, PLACEHOLDER_POSTER_URL);
    assert_eq!(harness.ctx.catalog.list().unwrap(), vec![movie]);
}

#[tokio::test]
async fn add_stores_poster_from_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("t", "Inception"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Poster": POSTER,
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let harness = TestHarness::with_posters(Arc::new(client(&server)));

    let movie = harness
        .ctx
        .catalog
        .add(&AddMovieRequest::new("Inception", "Sci-Fi", 8.8, 2010.0))
        .await
        .unwrap();

    assert_eq!(movie.poster_url, POSTER);
}
