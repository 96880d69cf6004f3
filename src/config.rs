use crate::api_keys;
use crate::omdb::DEFAULT_BASE_URL;
use std::fmt;
use tracing::{debug, info};

/// Runtime configuration.
///
/// Loaded from the environment, with a `.env` file taking part when present.
/// The API key falls back to the system keychain.
#[derive(Clone)]
pub struct Config {
    /// OMDb API key, absent when neither the environment nor the keychain has one
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("omdb_api_key", &self.omdb_api_key.as_ref().map(|_| "key_hidden"))
            .field("omdb_base_url", &self.omdb_base_url)
            .finish()
    }
}

impl Config {
    pub fn load() -> Self {
        if dotenvy::dotenv().is_ok() {
            info!("Config: loaded .env file");
        } else {
            debug!("Config: no .env file found");
        }

        Self::from_env()
    }

    /// Build configuration from environment variables only
    pub fn from_env() -> Self {
        let omdb_api_key = std::env::var("OMDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| api_keys::retrieve_api_key().ok());

        let omdb_base_url =
            std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if omdb_api_key.is_none() {
            info!("Config: no OMDb API key configured, DVD lookups will fail over to Blu-ray metadata");
        }

        Self {
            omdb_api_key,
            omdb_base_url,
        }
    }
}
