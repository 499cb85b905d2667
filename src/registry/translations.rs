//! Translation-code resolution for API.Bible edition identifiers.
//!
//! Short codes like "KJV" map to the opaque ids the API expects. A code that
//! already contains a hyphen is taken to be a raw id and passed through
//! unchanged; the API treats ids case-sensitively, so no case folding happens
//! on that path.

use crate::core::types::Language;

/// Translation code -> API.Bible edition id
const TRANSLATIONS: &[(&str, &str)] = &[
    // English editions
    ("KJV", "de4e12af7f28f599-02"),
    ("ASV", "06125adad2d5898a-01"),
    ("BSB", "bba9f40183526463-01"),
    ("CEV", "555fef9a6cb31151-01"),
    ("FBV", "65eec8e0b60e656b-01"),
    ("LSV", "01b29f4b342acc35-01"),
    // German editions
    ("LUTHER", "f492a38d0e52db0f-01"),
    ("LUT", "f492a38d0e52db0f-01"),
    ("GERMAN", "f492a38d0e52db0f-01"),
];

/// Edition id -> short label shown to users
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("de4e12af7f28f599-02", "KJV"),
    ("06125adad2d5898a-01", "ASV"),
    ("bba9f40183526463-01", "BSB"),
    ("555fef9a6cb31151-01", "CEV"),
    ("65eec8e0b60e656b-01", "FBV"),
    ("01b29f4b342acc35-01", "LSV"),
    ("f492a38d0e52db0f-01", "Elberfelder"),
    ("685d1470fe4d5c3b-01", "ASVBT"),
    ("6bab4d6c61b31b80-01", "Septuagint"),
];

const DEFAULT_ENGLISH_ID: &str = "06125adad2d5898a-01"; // ASV
const DEFAULT_GERMAN_ID: &str = "f492a38d0e52db0f-01"; // Elberfelder

/// Fallback edition used when no translation code is given or the code is
/// unrecognized
#[must_use]
pub fn default_bible_id(language: Language) -> &'static str {
    match language {
        Language::English => DEFAULT_ENGLISH_ID,
        Language::German => DEFAULT_GERMAN_ID,
    }
}

/// Resolve a translation code to an API.Bible edition id
///
/// An absent or empty code falls back to the language default. A code
/// containing a hyphen is already an edition id and is returned verbatim,
/// case preserved. Anything else is upper-cased and looked up in the static
/// table, falling back to the language default on a miss.
#[must_use]
pub fn resolve_bible_id<'a>(code: Option<&'a str>, language: Language) -> &'a str {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return default_bible_id(language);
    };

    if code.contains('-') {
        return code;
    }

    let upper = code.to_uppercase();
    TRANSLATIONS
        .iter()
        .find(|(known, _)| *known == upper)
        .map(|(_, id)| *id)
        .unwrap_or_else(|| default_bible_id(language))
}

/// Short display label for an edition id, if it is one we ship a label for
#[must_use]
pub fn display_name(bible_id: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == bible_id)
        .map(|(_, label)| *label)
}
