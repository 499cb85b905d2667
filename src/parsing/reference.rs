use crate::core::reference::ScriptureReference;
use crate::registry::store::BookRegistry;

/// Parses free-text scripture citations against a book registry
///
/// Accepted shapes, shown with English and German conventions:
///
/// ```text
/// Gen 1:1            single verse
/// 1. Mose 5,14       German numbering and comma separator
/// Gen 1:1-3          verse range within one chapter
/// Matt 5:3-7:12      range across chapters
/// ```
///
/// The grammar is matched against a prefix of the input; trailing text after
/// a well-formed citation is ignored. The book token is capped at two words
/// (plus an optional leading numeral), so three-word canonical names are
/// only reachable through their aliases.
pub struct ReferenceParser<'a> {
    registry: &'a BookRegistry,
}

impl<'a> ReferenceParser<'a> {
    pub fn new(registry: &'a BookRegistry) -> Self {
        Self { registry }
    }

    /// Parse a citation, returning `None` when the text does not match the
    /// grammar or the book token is not a recognized name
    pub fn parse(&self, text: &str) -> Option<ScriptureReference> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut cursor = Cursor::new(text);

        // Book token: optional numeral prefix ("1. Mose", "2 Samuel"), then
        // one or two words. The numeral must be followed by whitespace; a
        // bare digit can never start a book word.
        if !cursor.eat_digits().is_empty() {
            cursor.eat_char('.');
            if cursor.eat_whitespace().is_empty() {
                return None;
            }
        }

        if cursor.eat_letters().is_empty() {
            return None;
        }
        let one_word_end = cursor.pos;

        // A second word is only part of the token when it is actually
        // followed by the chapter number; otherwise fall back to one word.
        let mut token_end = one_word_end;
        let mark = cursor.pos;
        if !cursor.eat_whitespace().is_empty() && !cursor.eat_letters().is_empty() {
            token_end = cursor.pos;
        } else {
            cursor.pos = mark;
        }

        if cursor.eat_whitespace().is_empty() {
            return None;
        }
        let chapter = parse_number(cursor.eat_digits())?;

        if cursor.eat_separators().is_empty() {
            return None;
        }
        let verse_start = parse_number(cursor.eat_digits())?;

        let (chapter_end, verse_end) = parse_range(&mut cursor)?;

        let book = self.registry.normalize(&text[..token_end])?;

        Some(ScriptureReference {
            book,
            chapter,
            verse_start,
            verse_end,
            chapter_end,
            original: text.to_string(),
        })
    }
}

/// Parse the optional range suffix: `-verse` or `-chapter<sep>verse`
///
/// A dangling hyphen or otherwise incomplete suffix is not an error; it is
/// left unconsumed like any other trailing text.
fn parse_range(cursor: &mut Cursor<'_>) -> Option<(Option<u32>, Option<u32>)> {
    let mark = cursor.pos;
    if !cursor.eat_char('-') && !cursor.eat_char('–') {
        return Some((None, None));
    }

    // chapter:verse pair, a single separator character between the numbers
    let pair_mark = cursor.pos;
    let pair_chapter = cursor.eat_digits();
    if !pair_chapter.is_empty() && cursor.eat_separator_char() {
        let pair_verse = cursor.eat_digits();
        if !pair_verse.is_empty() {
            return Some((
                Some(parse_number(pair_chapter)?),
                Some(parse_number(pair_verse)?),
            ));
        }
    }

    // bare verse number
    cursor.pos = pair_mark;
    let verse = cursor.eat_digits();
    if !verse.is_empty() {
        return Some((None, Some(parse_number(verse)?)));
    }

    cursor.pos = mark;
    Some((None, None))
}

fn parse_number(digits: &str) -> Option<u32> {
    // Digit runs long enough to overflow are treated as unparseable
    digits.parse().ok()
}

fn is_book_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß')
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == ','
}

/// Byte-position scanner over the trimmed input
struct Cursor<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Cursor<'t> {
    fn new(text: &'t str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'t str {
        &self.text[self.pos..]
    }

    /// Consume a run of characters matching `pred`, returning the slice
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'t str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }

    fn eat_digits(&mut self) -> &'t str {
        self.eat_while(|c| c.is_ascii_digit())
    }

    fn eat_letters(&mut self) -> &'t str {
        self.eat_while(is_book_letter)
    }

    fn eat_whitespace(&mut self) -> &'t str {
        self.eat_while(char::is_whitespace)
    }

    /// Consume a run of chapter/verse separators (whitespace, `:` or `,`,
    /// mixed use allowed)
    fn eat_separators(&mut self) -> &'t str {
        self.eat_while(is_separator)
    }

    /// Consume exactly one separator character
    fn eat_separator_char(&mut self) -> bool {
        match self.rest().chars().next() {
            Some(c) if is_separator(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<ScriptureReference> {
        let registry = BookRegistry::new();
        ReferenceParser::new(&registry).parse(text)
    }

    #[test]
    fn test_single_verse() {
        let reference = parse("Gen 1:1").unwrap();
        assert_eq!(reference.book.as_str(), "Genesis");
        assert_eq!(reference.chapter, 1);
        assert_eq!(reference.verse_start, 1);
        assert_eq!(reference.verse_end, None);
        assert_eq!(reference.chapter_end, None);
        assert_eq!(reference.original, "Gen 1:1");
    }

    #[test]
    fn test_full_english_name() {
        let reference = parse("Genesis 1:1").unwrap();
        assert_eq!(reference.book.as_str(), "Genesis");
    }

    #[test]
    fn test_german_comma_separator() {
        let reference = parse("1. Mose 5,14").unwrap();
        assert_eq!(reference.book.as_str(), "Genesis");
        assert_eq!(reference.chapter, 5);
        assert_eq!(reference.verse_start, 14);
    }

    #[test]
    fn test_german_without_period() {
        let reference = parse("1 Mose 5,14").unwrap();
        assert_eq!(reference.book.as_str(), "Genesis");
    }

    #[test]
    fn test_mixed_conventions() {
        // German name with English colon separator
        let reference = parse("1. Mose 5:14").unwrap();
        assert_eq!(reference.book.as_str(), "Genesis");
        assert_eq!(reference.verse_start, 14);
    }

    #[test]
    fn test_umlaut_names() {
        assert_eq!(parse("Römer 8,28").unwrap().book.as_str(), "Romans");
        assert_eq!(parse("Matthäus 5,3").unwrap().book.as_str(), "Matthew");
    }

    #[test]
    fn test_verse_range() {
        let reference = parse("Gen 1:1-3").unwrap();
        assert_eq!(reference.verse_start, 1);
        assert_eq!(reference.verse_end, Some(3));
        assert_eq!(reference.chapter_end, None);
    }

    #[test]
    fn test_chapter_range() {
        let reference = parse("Matt 5:3-7:12").unwrap();
        assert_eq!(reference.book.as_str(), "Matthew");
        assert_eq!(reference.chapter, 5);
        assert_eq!(reference.verse_start, 3);
        assert_eq!(reference.chapter_end, Some(7));
        assert_eq!(reference.verse_end, Some(12));
    }

    #[test]
    fn test_en_dash_range() {
        let reference = parse("Gen 1:1–3").unwrap();
        assert_eq!(reference.verse_end, Some(3));
    }

    #[test]
    fn test_two_word_book_token() {
        let reference = parse("Song of 3:16");
        // token "Song of" is captured but is not a recognized name
        assert!(reference.is_none());

        let reference = parse("1 Samuel 3:4").unwrap();
        assert_eq!(reference.book.as_str(), "1 Samuel");
    }

    #[test]
    fn test_whitespace_separator() {
        let reference = parse("John 3 16").unwrap();
        assert_eq!(reference.chapter, 3);
        assert_eq!(reference.verse_start, 16);
    }

    #[test]
    fn test_trailing_text_is_tolerated() {
        let reference = parse("Gen 1:1 and some commentary").unwrap();
        assert_eq!(reference.verse_start, 1);
        assert_eq!(reference.original, "Gen 1:1 and some commentary");
    }

    #[test]
    fn test_dangling_hyphen_is_ignored() {
        let reference = parse("Gen 1:1-").unwrap();
        assert_eq!(reference.verse_end, None);
        assert_eq!(reference.chapter_end, None);
    }

    #[test]
    fn test_incomplete_chapter_range_falls_back_to_verse() {
        // "7:" after the hyphen is not a full chapter:verse pair; the 7 is
        // taken as the end verse and the rest ignored
        let reference = parse("Matt 5:3-7:").unwrap();
        assert_eq!(reference.verse_end, Some(7));
        assert_eq!(reference.chapter_end, None);
    }

    #[test]
    fn test_unparseable_inputs() {
        for input in [
            "",
            "   ",
            "not a reference",
            "Gen",
            "Gen 1",
            "Gen. 1:1",
            "1:1",
            "123 4:5",
            "InvalidBookXYZ 1:1",
        ] {
            assert!(parse(input).is_none(), "expected None for {input:?}");
        }
    }

    #[test]
    fn test_numeral_prefix_requires_whitespace() {
        // "1.Mose" is a valid alias but not a capturable token shape
        assert!(parse("1.Mose 5,14").is_none());
        assert!(parse("1mose 5,14").is_none());
    }

    #[test]
    fn test_inverted_range_passes_through() {
        // Bounds are not validated; garbage in, garbage out
        let reference = parse("Gen 1:5-2").unwrap();
        assert_eq!(reference.verse_start, 5);
        assert_eq!(reference.verse_end, Some(2));
    }

    #[test]
    fn test_overflowing_number_is_unparseable() {
        assert!(parse("Gen 99999999999:1").is_none());
    }

    #[test]
    fn test_display_round_trip() {
        let registry = BookRegistry::new();
        let parser = ReferenceParser::new(&registry);
        for input in ["Gen 1:1", "Gen 1:1-3", "Matt 5:3-7:12", "1. Mose 5,14"] {
            let first = parser.parse(input).unwrap();
            let second = parser.parse(&first.to_string()).unwrap();
            assert_eq!(first.book, second.book, "{input}");
            assert_eq!(first.chapter, second.chapter, "{input}");
            assert_eq!(first.verse_start, second.verse_start, "{input}");
            assert_eq!(first.verse_end, second.verse_end, "{input}");
            assert_eq!(first.chapter_end, second.chapter_end, "{input}");
        }
    }
}
