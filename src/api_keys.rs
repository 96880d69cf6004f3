use thiserror::Error;
use tracing::{debug, info, warn};

const KEYRING_SERVICE: &str = "disc-title";
const KEYRING_USER: &str = "omdb_api_key";

#[derive(Error, Debug)]
pub enum ApiKeyError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("API key not found")]
    NotFound,
}

/// OMDb API key kept in the system keychain
pub struct ApiKeyManager {
    entry: keyring::Entry,
}

impl ApiKeyManager {
    pub fn new() -> Result<Self, ApiKeyError> {
        Self::for_user(KEYRING_USER)
    }

    fn for_user(user: &str) -> Result<Self, ApiKeyError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, user)?;
        Ok(Self { entry })
    }

    pub fn store_api_key(&self, api_key: &str) -> Result<(), ApiKeyError> {
        self.entry.set_password(api_key).map_err(|e| {
            warn!("Error storing OMDb API key: {}", e);
            ApiKeyError::Keyring(e)
        })?;
        info!("Stored OMDb API key in keychain ({} chars)", api_key.len());
        Ok(())
    }

    pub fn get_api_key(&self) -> Result<String, ApiKeyError> {
        match self.entry.get_password() {
            Ok(password) => {
                debug!("Retrieved OMDb API key from keychain");
                Ok(password)
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No OMDb API key in keychain");
                Err(ApiKeyError::NotFound)
            }
            Err(e) => {
                warn!("Error retrieving OMDb API key from keychain: {}", e);
                Err(ApiKeyError::Keyring(e))
            }
        }
    }

    pub fn delete_api_key(&self) -> Result<(), ApiKeyError> {
        match self.entry.delete_credential() {
            Ok(()) => {
                info!("Removed OMDb API key from keychain");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Err(ApiKeyError::NotFound),
            Err(e) => Err(ApiKeyError::Keyring(e)),
        }
    }
}

pub fn retrieve_api_key() -> Result<String, ApiKeyError> {
    ApiKeyManager::new()?.get_api_key()
}

pub fn store_api_key(api_key: &str) -> Result<(), ApiKeyError> {
    ApiKeyManager::new()?.store_api_key(api_key)
}

pub fn remove_api_key() -> Result<(), ApiKeyError> {
    ApiKeyManager::new()?.delete_api_key()
}
