use crate::bluray::BlurayError;
use crate::omdb::OmdbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitleError {
    #[error("Title lookup failed: {0}")]
    LookupFailed(#[from] OmdbError),
    #[error("Blu-ray metadata unavailable: {0}")]
    MetadataUnavailable(#[from] BlurayError),
}
