use std::collections::HashMap;

use crate::core::types::BookName;
use crate::registry::aliases::{ENGLISH_ABBREVIATIONS, GERMAN_ALIASES};
use crate::registry::books::{CanonicalBook, BOOKS};

/// The bilingual book-name registry with lookup indexes
///
/// Built once from the compiled-in tables and read-only afterwards, so a
/// shared reference can be used from any number of callers.
#[derive(Debug)]
pub struct BookRegistry {
    /// German alias -> canonical name, keys in lower-case normal form
    german: HashMap<&'static str, &'static str>,

    /// English abbreviation -> canonical name
    english: HashMap<&'static str, &'static str>,

    /// Lower-cased canonical name -> canonical name, for the final
    /// case-insensitive full-name match
    canonical_lower: HashMap<String, &'static str>,

    /// Exact canonical name -> table row
    by_name: HashMap<&'static str, &'static CanonicalBook>,
}

impl BookRegistry {
    /// Build the registry indexes from the static tables
    pub fn new() -> Self {
        let mut german = HashMap::with_capacity(GERMAN_ALIASES.len());
        for (alias, name) in GERMAN_ALIASES {
            german.insert(*alias, *name);
        }

        let mut english = HashMap::with_capacity(ENGLISH_ABBREVIATIONS.len());
        for (alias, name) in ENGLISH_ABBREVIATIONS {
            english.insert(*alias, *name);
        }

        let mut canonical_lower = HashMap::with_capacity(BOOKS.len());
        let mut by_name = HashMap::with_capacity(BOOKS.len());
        for entry in BOOKS {
            canonical_lower.insert(entry.name.to_lowercase(), entry.name);
            by_name.insert(entry.name, entry);
        }

        Self {
            german,
            english,
            canonical_lower,
            by_name,
        }
    }

    /// Resolve a free-form book name or abbreviation to its canonical form
    ///
    /// Lookup is case- and surrounding-whitespace-insensitive. The German
    /// table is consulted first (it is the larger, more specific one), then
    /// the English abbreviations, then a case-insensitive match against the
    /// canonical display names. No fuzzy matching: unknown spellings yield
    /// `None`.
    pub fn normalize(&self, raw: &str) -> Option<BookName> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(name) = self.german.get(key.as_str()) {
            return Some(BookName::new(*name));
        }

        if let Some(name) = self.english.get(key.as_str()) {
            return Some(BookName::new(*name));
        }

        self.canonical_lower
            .get(&key)
            .map(|name| BookName::new(*name))
    }

    /// External code for a canonical book (e.g. Genesis -> "GEN")
    ///
    /// Total for registry-produced names; `None` only for a hand-constructed
    /// [`BookName`] outside the canonical set.
    pub fn external_code(&self, book: &BookName) -> Option<&'static str> {
        self.by_name.get(book.as_str()).map(|entry| entry.code)
    }

    /// Full table row for a canonical book
    pub fn get(&self, book: &BookName) -> Option<&'static CanonicalBook> {
        self.by_name.get(book.as_str()).copied()
    }

    /// All canonical books in table order
    pub fn books(&self) -> impl Iterator<Item = &'static CanonicalBook> {
        BOOKS.iter()
    }

    /// Number of canonical books
    pub fn len(&self) -> usize {
        BOOKS.len()
    }

    /// The canonical set is compiled in and never empty
    pub fn is_empty(&self) -> bool {
        BOOKS.is_empty()
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english_abbreviations() {
        let registry = BookRegistry::new();
        for (input, expected) in [
            ("Gen", "Genesis"),
            ("John", "John"),
            ("Rom", "Romans"),
            ("Rev", "Revelation"),
            ("jn", "John"),
        ] {
            assert_eq!(
                registry.normalize(input).unwrap().as_str(),
                expected,
                "normalize({input})"
            );
        }
    }

    #[test]
    fn test_normalize_german_names() {
        let registry = BookRegistry::new();
        for (input, expected) in [
            ("1. Mose", "Genesis"),
            ("5. Mose", "Deuteronomy"),
            ("Johannes", "John"),
            ("Römer", "Romans"),
            ("Matthäus", "Matthew"),
            ("Offenbarung", "Revelation"),
            ("1 könige", "1 Kings"),
            ("Sprüche", "Proverbs"),
        ] {
            assert_eq!(
                registry.normalize(input).unwrap().as_str(),
                expected,
                "normalize({input})"
            );
        }
    }

    #[test]
    fn test_normalize_casing_and_whitespace_variants() {
        let registry = BookRegistry::new();
        for input in ["1. Mose", "1 mose", "1MOSE", "  1.mose  "] {
            assert_eq!(
                registry.normalize(input).unwrap().as_str(),
                "Genesis",
                "normalize({input})"
            );
        }
    }

    #[test]
    fn test_normalize_canonical_full_names() {
        let registry = BookRegistry::new();
        assert_eq!(
            registry.normalize("song of solomon").unwrap().as_str(),
            "Song of Solomon"
        );
        assert_eq!(
            registry.normalize("1 THESSALONIANS").unwrap().as_str(),
            "1 Thessalonians"
        );
    }

    #[test]
    fn test_normalize_unknown() {
        let registry = BookRegistry::new();
        assert_eq!(registry.normalize("InvalidBookXYZ"), None);
        assert_eq!(registry.normalize(""), None);
        assert_eq!(registry.normalize("   "), None);
    }

    #[test]
    fn test_external_code_round_trip_for_all_books() {
        let registry = BookRegistry::new();
        for entry in registry.books() {
            let book = registry.normalize(entry.name).unwrap();
            assert_eq!(book.as_str(), entry.name);
            assert_eq!(registry.external_code(&book), Some(entry.code));
        }
    }

    #[test]
    fn test_external_code_expected_values() {
        let registry = BookRegistry::new();
        for (name, code) in [
            ("Genesis", "GEN"),
            ("1 Samuel", "1SA"),
            ("Psalms", "PSA"),
            ("Matthew", "MAT"),
            ("John", "JHN"),
            ("Revelation", "REV"),
        ] {
            let book = registry.normalize(name).unwrap();
            assert_eq!(registry.external_code(&book), Some(code), "{name}");
        }
    }

    #[test]
    fn test_external_code_requires_canonical_spelling() {
        let registry = BookRegistry::new();
        // The code table is keyed by exact canonical names; a raw alias
        // must go through normalize first.
        assert_eq!(registry.external_code(&BookName::new("genesis")), None);
        assert_eq!(registry.external_code(&BookName::new("Atlantis")), None);
    }

    #[test]
    fn test_every_alias_resolves_to_a_canonical_book() {
        let registry = BookRegistry::new();
        for (alias, name) in GERMAN_ALIASES.iter().chain(ENGLISH_ABBREVIATIONS) {
            let book = registry
                .normalize(alias)
                .unwrap_or_else(|| panic!("alias {alias} did not resolve"));
            assert_eq!(book.as_str(), *name, "alias {alias}");
            assert!(
                registry.external_code(&book).is_some(),
                "alias {alias} maps to unknown book {name}"
            );
        }
    }
}
