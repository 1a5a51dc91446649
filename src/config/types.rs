use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::poster::{OMDB_BASE_URL, PLACEHOLDER_POSTER_URL};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub posters: PosterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built browser client to serve at `/` (SPA fallback to index.html)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite database path. Required; `DATABASE_URL` overrides it.
    #[serde(default)]
    pub url: Option<String>,
}

impl DatabaseConfig {
    /// Filesystem path of the database, with any `sqlite:` scheme removed.
    pub fn path(&self) -> Option<&str> {
        let url = self.url.as_deref()?.trim();
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        (!path.is_empty()).then_some(path)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PosterConfig {
    /// OMDb API key. `OMDB_API_KEY` overrides it.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_poster_base_url")]
    pub base_url: String,

    /// Image used when no poster can be found
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

fn default_poster_base_url() -> String {
    OMDB_BASE_URL.to_string()
}
fn default_placeholder_url() -> String {
    PLACEHOLDER_POSTER_URL.to_string()
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_poster_base_url(),
            placeholder_url: default_placeholder_url(),
        }
    }
}
