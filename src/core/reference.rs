use serde::{Deserialize, Serialize};

use crate::core::types::BookName;
use crate::registry::store::BookRegistry;

/// A parsed scripture citation within a single canonical book
///
/// Constructed once per parse, immutable afterwards. `chapter_end` is only
/// ever set together with `verse_end`; range bounds are carried through
/// without validation, mirroring the permissive parse grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureReference {
    /// Canonical book, never a raw alias
    pub book: BookName,

    /// Starting chapter
    pub chapter: u32,

    /// Starting verse
    pub verse_start: u32,

    /// Last verse of a range; absent for single-verse citations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_end: Option<u32>,

    /// Last chapter of a cross-chapter range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_end: Option<u32>,

    /// Raw input the reference was parsed from, kept for diagnostics
    pub original: String,
}

impl ScriptureReference {
    /// Build a single-verse reference by hand (the parser is the usual
    /// constructor)
    pub fn new(book: BookName, chapter: u32, verse_start: u32) -> Self {
        Self {
            book,
            chapter,
            verse_start,
            verse_end: None,
            chapter_end: None,
            original: String::new(),
        }
    }

    /// Extend to a verse range within the starting chapter
    #[must_use]
    pub fn with_verse_end(mut self, verse_end: u32) -> Self {
        self.verse_end = Some(verse_end);
        self
    }

    /// Extend to a cross-chapter range
    #[must_use]
    pub fn with_chapter_range(mut self, chapter_end: u32, verse_end: u32) -> Self {
        self.chapter_end = Some(chapter_end);
        self.verse_end = Some(verse_end);
        self
    }

    /// Whether the citation denotes more than one verse
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.verse_end.is_some()
    }

    /// Whether the citation spans more than one chapter
    #[must_use]
    pub fn spans_chapters(&self) -> bool {
        self.chapter_end.is_some()
    }

    /// Render the passage token consumed by the API.Bible passages endpoint
    ///
    /// The wire format is fixed: `GEN.1.1`, `GEN.1.1-GEN.1.3` for a range in
    /// one chapter, `MAT.5.3-MAT.7.12` across chapters. Returns `None` when
    /// the book has no external code, which can only happen for a
    /// hand-constructed [`BookName`] outside the canonical set.
    pub fn api_token(&self, registry: &BookRegistry) -> Option<String> {
        let code = registry.external_code(&self.book)?;
        let start = format!("{code}.{}.{}", self.chapter, self.verse_start);

        let token = match (self.verse_end, self.chapter_end) {
            (None, _) => start,
            (Some(verse_end), None) => {
                format!("{start}-{code}.{}.{verse_end}", self.chapter)
            }
            (Some(verse_end), Some(chapter_end)) => {
                format!("{start}-{code}.{chapter_end}.{verse_end}")
            }
        };

        Some(token)
    }
}

impl std::fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse_start)?;

        match (self.verse_end, self.chapter_end) {
            (Some(verse_end), None) => write!(f, "-{verse_end}"),
            (Some(verse_end), Some(chapter_end)) => write!(f, "-{chapter_end}:{verse_end}"),
            (None, _) => Ok(()),
        }
    }
}
