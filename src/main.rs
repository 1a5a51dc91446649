mod cli;

use movienight::{
    catalog::{CatalogService, SqliteMovieStore},
    config,
    poster::OmdbClient,
    server::{self, AppContext},
};
use movienight_db::pool::init_pool;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Movie Night server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let db_path = config
        .database
        .path()
        .context("No database configured")?
        .to_string();
    tracing::info!("Initializing database at {}", db_path);
    let db_pool = init_pool(&db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    let posters = OmdbClient::from_config(&config.posters);
    if posters.is_available() {
        tracing::info!("Poster lookup enabled");
    }

    let catalog = CatalogService::new(
        Arc::new(SqliteMovieStore::new(db_pool)),
        Arc::new(posters),
    );

    match catalog.count() {
        Ok(count) => tracing::info!("Catalog holds {} movies", count),
        Err(e) => tracing::warn!("Failed to count movies: {}", e),
    }

    server::start_server(AppContext::new(config, catalog)).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "movienight=trace,movienight_db=debug,tower_http=debug".to_string()
        } else {
            "movienight=debug,movienight_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("movienight {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => println!("Validating config: {:?}", p),
        None => println!("No config file specified, checking default locations and environment"),
    }

    let config = config::load_config_or_default(path)?;

    println!("✓ Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!(
        "  Database: {}",
        config.database.path().unwrap_or_default()
    );
    println!(
        "  Poster lookup: {}",
        if config.posters.api_key.is_some() {
            "enabled"
        } else {
            "disabled (placeholder only)"
        }
    );
    if let Some(ref dir) = config.server.static_dir {
        println!("  Static client: {:?}", dir);
    }

    Ok(())
}
