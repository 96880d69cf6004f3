/// Clean up a title for use as a filename component.
///
/// Drops `[...]` groups, collapses whitespace, turns `: ` into ` - ` and
/// strips everything but word characters, `-`, `.`, `(`, `)` and space.
pub fn clean_for_filename(title: &str) -> String {
    use regex::Regex;

    // Remove bracketed annotations: [Director's Cut]
    let bracket_pattern = Regex::new(r"\[(.*?)\]").unwrap();
    let cleaned = bracket_pattern.replace_all(title, "");

    let whitespace_pattern = Regex::new(r"\s+").unwrap();
    let cleaned = whitespace_pattern.replace_all(&cleaned, " ");

    let cleaned = cleaned.replace(" : ", " - ").replace(": ", " - ");

    let disallowed_pattern = Regex::new(r"[^\w\-_.() ]").unwrap();
    let cleaned = disallowed_pattern.replace_all(cleaned.trim(), "");

    // Removing characters can leave doubled or edge spaces behind
    cleaned
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_clean_for_filename() {
        assert_eq!(
            clean_for_filename("Movie [Director's Cut]  Edition"),
            "Movie Edition"
        );
        assert_eq!(
            clean_for_filename("Star Wars: Episode IV - A New Hope"),
            "Star Wars - Episode IV - A New Hope"
        );
        assert_eq!(clean_for_filename("Alien : Covenant"), "Alien - Covenant");
        assert_eq!(clean_for_filename("  Heat (1995)\t"), "Heat (1995)");
        assert_eq!(clean_for_filename("What?/Why*"), "WhatWhy");
    }

    #[test]
    fn test_clean_keeps_unicode_word_characters() {
        assert_eq!(clean_for_filename("Amélie"), "Amélie");
    }

    #[test]
    fn test_clean_removes_gaps_left_by_dropped_characters() {
        assert_eq!(clean_for_filename("Fast & Furious"), "Fast Furious");
        assert_eq!(clean_for_filename("! Leading"), "Leading");
        assert_eq!(clean_for_filename("Trailing ?"), "Trailing");
    }

    #[test]
    fn test_clean_is_idempotent_and_safe() {
        let inputs = [
            "",
            "   ",
            "Movie [Director's Cut]  Edition",
            "Fast & Furious : Tokyo Drift",
            "A [x] [y] B",
            "Unclosed [bracket here",
            "Ampersand &  & spaces",
            "Colon:no space",
            "Tabs\tand\nnewlines",
            "Mission: Impossible – Fallout",
            "WALL·E",
            "Léon: The Professional",
        ];

        let filename_safe = Regex::new(r"^[\w\-_.() ]*$").unwrap();

        for input in inputs {
            let once = clean_for_filename(input);
            assert_eq!(clean_for_filename(&once), once, "not idempotent for {:?}", input);
            assert!(
                filename_safe.is_match(&once),
                "unsafe output {:?} for {:?}",
                once,
                input
            );
        }
    }
}
