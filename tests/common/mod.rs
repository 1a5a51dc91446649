//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which wires an in-memory DB, a stub poster
//! lookup and a full [`AppContext`]. [`TestHarness::with_server`] starts Axum
//! on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use movienight::catalog::{CatalogService, SqliteMovieStore};
use movienight::config::Config;
use movienight::poster::PosterLookup;
use movienight::server::{create_router, AppContext};
use movienight_db::pool::{init_memory_pool, DbPool};

pub const STUB_POSTER: &str = "https://img.example.com/poster.jpg";

/// Poster lookup returning a fixed URL and counting calls.
#[derive(Default)]
pub struct StubPosters {
    pub calls: AtomicUsize,
}

impl StubPosters {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PosterLookup for StubPosters {
    async fn fetch_poster_url(&self, _title: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        STUB_POSTER.to_string()
    }
}

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    pub posters: Arc<StubPosters>,
}

impl TestHarness {
    /// Create a new harness with default configuration and a stub poster lookup.
    pub fn new() -> Self {
        let posters = Arc::new(StubPosters::default());
        Self::build(posters.clone(), posters)
    }

    /// Create a harness using the given poster lookup.
    pub fn with_posters(lookup: Arc<dyn PosterLookup>) -> Self {
        Self::build(lookup, Arc::new(StubPosters::default()))
    }

    fn build(lookup: Arc<dyn PosterLookup>, posters: Arc<StubPosters>) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let catalog = CatalogService::new(Arc::new(SqliteMovieStore::new(db.clone())), lookup);

        let mut config = Config::default();
        config.database.url = Some(":memory:".into());

        Self {
            ctx: AppContext::new(config, catalog),
            db,
            posters,
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone(), None)
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let addr = serve(harness.router()).await;
        (harness, addr)
    }
}

/// Serve `app` on a random local port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind random port");
    let addr = listener.local_addr().expect("failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    addr
}
