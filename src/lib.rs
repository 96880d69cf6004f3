// Library exports for the binary and integration tests

pub mod api_keys;
pub mod bluray;
pub mod config;
pub mod disc;
pub mod dvd;
pub mod error;
pub mod omdb;
pub mod resolver;
pub mod sanitize;

pub use config::Config;
pub use disc::{Disc, TitleYear};
pub use dvd::DvdTitle;
pub use error::TitleError;
pub use omdb::{MovieMatch, OmdbClient, OmdbError, TitleLookup};
pub use resolver::TitleResolver;
pub use sanitize::clean_for_filename;
