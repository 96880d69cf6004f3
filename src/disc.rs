use serde::Serialize;
use std::path::PathBuf;

/// A mounted optical disc handed over by the ripping pipeline.
///
/// `has_nice_title` is written by [`crate::TitleResolver::resolve`] and is
/// true only when a non-empty title was resolved from the lookup service or
/// the Blu-ray metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub label: String,
    pub mountpoint: PathBuf,
    pub has_nice_title: bool,
}

impl Disc {
    pub fn new(label: impl Into<String>, mountpoint: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            mountpoint: mountpoint.into(),
            has_nice_title: false,
        }
    }
}

/// Title and release year of a disc. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TitleYear {
    pub title: Option<String>,
    pub year: Option<String>,
}

impl TitleYear {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            year: Some(year.into()),
        }
    }

    /// Neither title nor year
    pub fn absent() -> Self {
        Self::default()
    }
}
