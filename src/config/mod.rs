mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable holding the SQLite database path.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
/// Environment variable holding the OMDb API key.
pub const ENV_OMDB_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";

/// Load configuration from a TOML file, then apply environment overrides
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or fall back to defaults plus environment
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./movienight.toml",
        "~/.config/movienight/config.toml",
        "/etc/movienight/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config)?;
    Ok(config)
}

/// Overlay environment values on top of file values.
///
/// `lookup` resolves a variable name to its value; empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_DATABASE_URL) {
        config.database.url = Some(url);
    }
    if let Some(key) = get(ENV_OMDB_API_KEY) {
        config.posters.api_key = Some(key);
    }
    if let Some(host) = get(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.server.port = port
            .trim()
            .parse()
            .with_context(|| format!("{ENV_PORT} is not a valid port: {port:?}"))?;
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.database.path().is_none() {
        anyhow::bail!(
            "No database configured: set {ENV_DATABASE_URL} or [database] url in the config file"
        );
    }

    if config.posters.placeholder_url.trim().is_empty() {
        anyhow::bail!("Poster placeholder URL cannot be empty");
    }

    if config.posters.api_key.as_deref().map_or(true, str::is_empty) {
        tracing::warn!(
            "{ENV_OMDB_API_KEY} is not set; every movie will get the placeholder poster"
        );
    }

    if let Some(ref dir) = config.server.static_dir {
        if !dir.exists() {
            tracing::warn!("Static client directory does not exist: {:?}", dir);
        }
    }

    Ok(())
}
