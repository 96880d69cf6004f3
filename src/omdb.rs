use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Url};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Stand-in for the API key in anything that gets logged
const HIDDEN_KEY: &str = "key_hidden";

#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("No OMDb API key configured")]
    MissingApiKey,
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("OMDb returned HTTP status {0}")]
    Status(u16),
    #[error("OMDb returned an error: {0}")]
    Service(String),
    #[error("Invalid request URL: {0}")]
    Url(String),
    #[error("OMDb response has no {0} field")]
    MissingField(&'static str),
}

/// Raw OMDb response body. `Response` is the string "True" or "False".
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Title and year exactly as the lookup service reported them.
///
/// The title is empty when the service answered without naming a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieMatch {
    pub title: String,
    pub year: String,
}

/// Anything that can turn a title guess into a movie match.
#[async_trait]
pub trait TitleLookup: Send + Sync {
    /// `year` is empty when unknown.
    async fn lookup(&self, title: &str, year: &str) -> Result<MovieMatch, OmdbError>;
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("api_key", &HIDDEN_KEY)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Query OMDb for a movie by title and optional year.
    ///
    /// Transport errors, non-success statuses, malformed bodies (including
    /// a success body without `Title` or `Year`) and `"Response": "False"`
    /// all come back as `Err`.
    pub async fn search_title(&self, title: &str, year: &str) -> Result<MovieMatch, OmdbError> {
        debug!("Calling OMDb with title '{}' and year '{}'", title, year);

        if self.api_key.is_empty() {
            warn!("✗ OMDb lookup skipped, no API key configured");
            return Err(OmdbError::MissingApiKey);
        }

        let url = build_url(&self.base_url, &self.api_key, title, year)?;
        let redacted = build_url(&self.base_url, HIDDEN_KEY, title, year)?;
        debug!("📡 OMDb API: GET {}", redacted);

        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            debug!("OMDb request failed: {}", e);
            OmdbError::Request(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ OMDb API error: {}", status);
            return Err(OmdbError::Status(status.as_u16()));
        }

        let body: OmdbResponse = response
            .json()
            .await
            .map_err(|e| OmdbError::Request(e.without_url()))?;

        if body.response == "False" {
            let message = body.error.unwrap_or_else(|| "unknown error".to_string());
            debug!("OMDb lookup failed with error: {}", message);
            return Err(OmdbError::Service(message));
        }

        let title = body.title.ok_or(OmdbError::MissingField("Title"))?;
        let year = body.year.ok_or(OmdbError::MissingField("Year"))?;

        debug!(
            "✓ OMDb lookup successful, title '{}' and year '{}'",
            title, year
        );

        Ok(MovieMatch { title, year })
    }
}

#[async_trait]
impl TitleLookup for OmdbClient {
    async fn lookup(&self, title: &str, year: &str) -> Result<MovieMatch, OmdbError> {
        self.search_title(title, year).await
    }
}

/// Build the lookup URL. Parameter order matches what OMDb documents.
fn build_url(base_url: &str, api_key: &str, title: &str, year: &str) -> Result<Url, OmdbError> {
    Url::parse_with_params(
        base_url,
        [
            ("t", title),
            ("y", year),
            ("plot", "short"),
            ("r", "json"),
            ("apikey", api_key),
        ],
    )
    .map_err(|e| OmdbError::Url(format!("Failed to parse base URL '{}': {}", base_url, e)))
}
