use crate::disc::Disc;
use crate::error::TitleError;
use crate::omdb::TitleLookup;
use tracing::{debug, info};

/// Authoring tags that volume labels carry alongside the title.
/// `_SE` never matches: `_` becomes a space before tags are removed.
const LABEL_NOISE: [&str; 5] = ["16X9", "4X3", "_SE", "THX", "DTS"];

/// Outcome of a DVD lookup that reached the service and got an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DvdTitle {
    Found { title: String, year: String },
    /// The service answered but had no title for the guess.
    NotFound,
}

/// Turn a raw volume label like `THE_MATRIX_16X9` into a search guess.
///
/// The cleanup is repeated until nothing changes so that removing one tag
/// cannot splice another one together.
pub fn guess_title_from_label(label: &str) -> String {
    let mut guess = label.to_string();

    loop {
        let mut next = guess.replace('_', " ");
        for noise in LABEL_NOISE {
            next = next.replace(noise, "");
        }
        next = next.replace(" AND ", " ");

        if next == guess {
            return guess;
        }
        guess = next;
    }
}

/// Resolve a DVD title by asking the lookup service about the label.
///
/// `Err` means the lookup could not be completed; `Ok(DvdTitle::NotFound)`
/// means it completed without a title.
pub async fn resolve_dvd<L>(lookup: &L, disc: &Disc) -> Result<DvdTitle, TitleError>
where
    L: TitleLookup + ?Sized,
{
    debug!("Resolving DVD title for {:?}", disc);

    let guess = guess_title_from_label(&disc.label);
    info!("💿 DVD label '{}' -> guess '{}'", disc.label, guess);

    let found = lookup.lookup(&guess, "").await?;

    if found.title.is_empty() {
        debug!("Lookup answered without a title for '{}'", guess);
        return Ok(DvdTitle::NotFound);
    }

    Ok(DvdTitle::Found {
        title: found.title,
        year: found.year,
    })
}
