use crate::bluray::resolve_bluray;
use crate::disc::{Disc, TitleYear};
use crate::dvd::{resolve_dvd, DvdTitle};
use crate::omdb::TitleLookup;
use crate::sanitize::clean_for_filename;
use tracing::{info, warn};

/// Year reported when a DVD lookup answered but had no title
pub const UNKNOWN_YEAR: &str = "0000";

/// Works out a filename-friendly title and year for a mounted disc.
pub struct TitleResolver<L> {
    lookup: L,
}

impl<L: TitleLookup> TitleResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolve the title of `disc`, trying the DVD lookup first.
    ///
    /// A failed lookup falls back to the Blu-ray metadata. A lookup that
    /// answers without a title returns the raw label and [`UNKNOWN_YEAR`]
    /// instead. `disc.has_nice_title` is set when a non-empty title is
    /// returned from either source.
    pub async fn resolve(&self, disc: &mut Disc) -> TitleYear {
        disc.has_nice_title = false;

        match resolve_dvd(&self.lookup, disc).await {
            Ok(DvdTitle::Found { title, year }) => {
                let title = clean_for_filename(&title);
                info!("DVD title found: {} : {}", title, year);
                disc.has_nice_title = !title.is_empty();
                TitleYear::new(title, year)
            }
            Ok(DvdTitle::NotFound) => {
                warn!("DVD title not found, using label '{}'", disc.label);
                TitleYear::new(disc.label.clone(), UNKNOWN_YEAR)
            }
            Err(e) => {
                warn!("DVD lookup failed ({}), trying Blu-ray metadata", e);
                self.fall_back_to_bluray(disc)
            }
        }
    }

    fn fall_back_to_bluray(&self, disc: &mut Disc) -> TitleYear {
        let mut found = resolve_bluray(disc);

        if let Some(title) = found.title.take() {
            let title = clean_for_filename(&title);
            info!(
                "Blu-ray title found: {} : {}",
                title,
                found.year.as_deref().unwrap_or_default()
            );
            disc.has_nice_title = !title.is_empty();
            found.title = Some(title);
        }

        found
    }
}
