//! Catalog contents survive a restart when backed by an on-disk database.

mod common;

use std::sync::Arc;

use common::StubPosters;
use movienight::catalog::{AddMovieRequest, CatalogService, SqliteMovieStore};
use movienight_db::pool::init_pool;
use tempfile::tempdir;

fn open(path: &str) -> CatalogService {
    let pool = init_pool(path).unwrap();
    CatalogService::new(
        Arc::new(SqliteMovieStore::new(pool)),
        Arc::new(StubPosters::default()),
    )
}

#[tokio::test]
async fn movies_survive_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("movies.db");
    let db_path = db_path.to_str().unwrap();

    let heat = {
        let catalog = open(db_path);
        let heat = catalog
            .add(&AddMovieRequest::new("Heat", "Crime", 8.3, 1995.0))
            .await
            .unwrap();
        let alien = catalog
            .add(&AddMovieRequest::new("Alien", "Horror", 8.5, 1979.0))
            .await
            .unwrap();
        catalog.delete(&alien.id.to_string()).unwrap();
        heat
    };

    let catalog = open(db_path);
    assert_eq!(catalog.list().unwrap(), vec![heat]);
}
