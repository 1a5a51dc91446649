//! OMDb poster lookup.
//!
//! Issues `GET {base_url}/?t={title}&apikey={key}` and reads the `Poster`
//! field. OMDb answers "no poster" with the literal `"N/A"` and "no movie"
//! with `"Response": "False"`; both fall back to the placeholder, as do
//! transport errors, non-2xx statuses and bodies that fail to parse.
//!
//! There is no retry and no cache: every call is one request.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::PosterLookup;
use crate::config::PosterConfig;

/// OMDb's marker for a missing field value.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// OMDb-backed [`PosterLookup`].
///
/// # Examples
///
/// ```no_run
/// use movienight::poster::{OmdbClient, PosterLookup, OMDB_BASE_URL, PLACEHOLDER_POSTER_URL};
///
/// # async fn demo() {
/// let client = OmdbClient::new(Some("your-api-key".into()), OMDB_BASE_URL, PLACEHOLDER_POSTER_URL);
/// let url = client.fetch_poster_url("Inception").await;
/// # }
/// ```
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    placeholder_url: String,
}

impl OmdbClient {
    /// Create a client. With no API key every lookup returns the placeholder
    /// without touching the network.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        placeholder_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            placeholder_url: placeholder_url.into(),
        }
    }

    pub fn from_config(config: &PosterConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.placeholder_url.clone(),
        )
    }

    /// Whether an API key is configured.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn placeholder_url(&self) -> &str {
        &self.placeholder_url
    }

    // The request URL carries the API key, so it is stripped from errors.
    async fn lookup(&self, title: &str, api_key: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/", self.base_url);

        let body: OmdbResponse = self
            .client
            .get(&url)
            .query(&[("t", title), ("apikey", api_key)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("OMDb request failed")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("OMDb returned an error status")?
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("failed to parse OMDb response")?;

        if !body.response.eq_ignore_ascii_case("true") {
            debug!(
                title,
                error = body.error.as_deref().unwrap_or("unknown"),
                "OMDb has no match"
            );
            return Ok(None);
        }

        Ok(body.poster.and_then(usable_poster))
    }
}

/// Keep a poster value only if it looks like an image URL.
fn usable_poster(poster: String) -> Option<String> {
    let poster = poster.trim();
    if poster.is_empty() || poster.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return None;
    }
    if !(poster.starts_with("http://") || poster.starts_with("https://")) {
        return None;
    }
    Some(poster.to_string())
}

#[async_trait]
impl PosterLookup for OmdbClient {
    async fn fetch_poster_url(&self, title: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!(title, "No OMDb API key configured, using placeholder poster");
            return self.placeholder_url.clone();
        };

        match self.lookup(title, api_key).await {
            Ok(Some(url)) => {
                debug!(title, url = %url, "Found poster");
                url
            }
            Ok(None) => self.placeholder_url.clone(),
            Err(e) => {
                let error = format!("{e:#}");
                warn!(title, error = %error, "Poster lookup failed, using placeholder");
                self.placeholder_url.clone()
            }
        }
    }
}
