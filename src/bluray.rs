//! Blu-ray title detection
//!
//! Blu-ray discs authored with disc library metadata carry an English
//! `bdmt_eng.xml` under `BDMV/META/DL`. The title lives in
//! `disclib > di:discinfo > di:title > di:name`; the year is taken from the
//! file's modification time since the schema has no reliable release date.

use crate::disc::{Disc, TitleYear};
use crate::error::TitleError;
use chrono::{DateTime, Local};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};
use unicode_normalization::UnicodeNormalization;

const METADATA_FILE: [&str; 4] = ["BDMV", "META", "DL", "bdmt_eng.xml"];

const TITLE_ELEMENTS: [&str; 4] = ["disclib", "di:discinfo", "di:title", "di:name"];

/// Stripped in this order; later entries are substrings of earlier ones
const MARKETING_SUFFIXES: [&str; 5] = [
    " - Blu-rayTM",
    " Blu-rayTM",
    " - BLU-RAYTM",
    " - BLU-RAY",
    " - Blu-ray",
];

#[derive(Debug, Error)]
pub enum BlurayError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid XML: {0}")]
    Xml(String),
    #[error("No {0} element")]
    MissingTitle(String),
}

/// Location of the English disc library metadata under a mountpoint
pub fn metadata_path(mountpoint: &Path) -> PathBuf {
    METADATA_FILE
        .iter()
        .fold(mountpoint.to_path_buf(), |path, part| path.join(part))
}

/// Resolve a Blu-ray title, logging and returning an absent pair on failure.
pub fn resolve_bluray(disc: &Disc) -> TitleYear {
    match read_bluray_title(&disc.mountpoint) {
        Ok(found) => {
            info!(
                "📀 Blu-ray metadata title '{}' ({})",
                found.title.as_deref().unwrap_or_default(),
                found.year.as_deref().unwrap_or_default()
            );
            found
        }
        Err(e @ TitleError::MetadataUnavailable(BlurayError::Io { .. })) => {
            error!(
                "Disc is a Blu-ray, but bdmt_eng.xml could not be read ({}). Disc cannot be identified.",
                e
            );
            TitleYear::absent()
        }
        Err(e) => {
            error!(
                "Could not parse title from bdmt_eng.xml ({}). Disc cannot be identified.",
                e
            );
            TitleYear::absent()
        }
    }
}

/// Read title and year from `bdmt_eng.xml` below `mountpoint`.
///
/// Every failure is a [`TitleError::MetadataUnavailable`].
pub fn read_bluray_title(mountpoint: &Path) -> Result<TitleYear, TitleError> {
    let path = metadata_path(mountpoint);
    debug!("Reading Blu-ray metadata from {}", path.display());

    let io_error = |source: std::io::Error| BlurayError::Io {
        path: path.clone(),
        source,
    };

    let bytes = fs::read(&path).map_err(io_error)?;
    let xml = String::from_utf8_lossy(&bytes);

    let raw_title = find_text(&xml, &TITLE_ELEMENTS)?
        .ok_or_else(|| BlurayError::MissingTitle(TITLE_ELEMENTS.join(" > ")))?;

    let modified = fs::metadata(&path)
        .and_then(|m| m.modified())
        .map_err(io_error)?;
    let year = DateTime::<Local>::from(modified).format("%Y").to_string();

    let title = strip_marketing_suffixes(&fold_to_ascii(&raw_title));
    debug!("Blu-ray title '{}' normalised to '{}'", raw_title, title);

    Ok(TitleYear::new(title, year))
}

/// Text content of the element at `elements`, matched by qualified name
/// from the document root.
///
/// Returns `Ok(None)` when any element on the way is missing or the final
/// element has no text.
pub fn find_text(xml: &str, elements: &[&str]) -> Result<Option<String>, BlurayError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut open: Vec<String> = Vec::new();
    let mut text: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| BlurayError::Xml(format!("at byte {}: {}", reader.buffer_position(), e)))?;

        match event {
            Event::Start(e) => {
                open.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::End(_) => {
                if open == elements {
                    return Ok(text.filter(|t| !t.is_empty()));
                }
                open.pop();
            }
            Event::Text(t) if open == elements => {
                let unescaped = t.unescape().map_err(|e| BlurayError::Xml(e.to_string()))?;
                text.get_or_insert_with(String::new).push_str(&unescaped);
            }
            Event::CData(c) if open == elements => {
                text.get_or_insert_with(String::new)
                    .push_str(&String::from_utf8_lossy(&c));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// NFKD-decompose and drop whatever has no ASCII form (`é` -> `e`, `™` -> `TM`).
pub fn fold_to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

pub fn strip_marketing_suffixes(title: &str) -> String {
    MARKETING_SUFFIXES
        .iter()
        .fold(title.to_string(), |title, suffix| title.replace(suffix, ""))
}
