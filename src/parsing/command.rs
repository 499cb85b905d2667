use serde::{Deserialize, Serialize};

use crate::core::reference::ScriptureReference;
use crate::core::types::Language;
use crate::parsing::reference::ReferenceParser;
use crate::registry::store::BookRegistry;

/// The two chat command keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Bible,
    Bibel,
}

impl Command {
    fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("bible") {
            Some(Self::Bible)
        } else if word.eq_ignore_ascii_case("bibel") {
            Some(Self::Bibel)
        } else {
            None
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Bible => "bible",
            Self::Bibel => "bibel",
        }
    }

    /// Language whose default translation the command implies
    #[must_use]
    pub fn language(&self) -> Language {
        match self {
            Self::Bible => Language::English,
            Self::Bibel => Language::German,
        }
    }
}

/// A fully extracted chat command: keyword, optional translation code, and
/// the parsed reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessage {
    pub command: Command,
    pub translation: Option<String>,
    pub reference: ScriptureReference,
}

/// Extracts `!bible` / `!bibel` commands from raw chat messages
pub struct CommandExtractor<'a> {
    parser: ReferenceParser<'a>,
}

impl<'a> CommandExtractor<'a> {
    pub fn new(registry: &'a BookRegistry) -> Self {
        Self {
            parser: ReferenceParser::new(registry),
        }
    }

    /// Extract command, translation and reference from a message
    ///
    /// Returns `None` when the message carries no recognizable command, an
    /// expected outcome rather than an error. Translation codes cannot be told
    /// apart from book tokens by shape alone, so the remainder is parsed as
    /// a plain reference first; only if that fails is a leading all-caps
    /// token of 2-10 letters split off and the rest re-parsed. This keeps
    /// "LUTHER 1. Mose 1,1" working without misreading "Gen 1:1" as a code.
    pub fn extract(&self, message: &str) -> Option<CommandMessage> {
        let message = message.trim();
        let rest = message.strip_prefix('!')?;

        let keyword = rest.get(..5)?;
        let command = Command::from_keyword(keyword)?;

        // The keyword must be followed by whitespace and a non-empty rest
        let after = rest.get(5..)?;
        let remainder = after.trim_start();
        if remainder.len() == after.len() || remainder.is_empty() {
            return None;
        }

        if let Some(reference) = self.parser.parse(remainder) {
            return Some(CommandMessage {
                command,
                translation: None,
                reference,
            });
        }

        let (code, rest) = split_translation_code(remainder)?;
        let reference = self.parser.parse(rest)?;
        Some(CommandMessage {
            command,
            translation: Some(code.to_string()),
            reference,
        })
    }
}

/// Split a leading all-caps translation code (2-10 letters) off the text
fn split_translation_code(text: &str) -> Option<(&str, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(text.len());
    if !(2..=10).contains(&end) {
        return None;
    }

    let after = &text[end..];
    let rest = after.trim_start();
    if rest.len() == after.len() || rest.is_empty() {
        return None;
    }

    Some((&text[..end], rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(message: &str) -> Option<CommandMessage> {
        let registry = BookRegistry::new();
        CommandExtractor::new(&registry).extract(message)
    }

    #[test]
    fn test_plain_english_command() {
        let message = extract("!bible Gen 1:1").unwrap();
        assert_eq!(message.command, Command::Bible);
        assert_eq!(message.translation, None);
        assert_eq!(message.reference.book.as_str(), "Genesis");
    }

    #[test]
    fn test_plain_german_command() {
        let message = extract("!bibel 1. Mose 5,14").unwrap();
        assert_eq!(message.command, Command::Bibel);
        assert_eq!(message.command.language(), Language::German);
        assert_eq!(message.translation, None);
        assert_eq!(message.reference.book.as_str(), "Genesis");
    }

    #[test]
    fn test_translation_code() {
        let message = extract("!bible KJV Gen 1:1").unwrap();
        assert_eq!(message.translation.as_deref(), Some("KJV"));
        assert_eq!(message.reference.book.as_str(), "Genesis");

        let message = extract("!bible ESV John 3:16").unwrap();
        assert_eq!(message.translation.as_deref(), Some("ESV"));
        assert_eq!(message.reference.book.as_str(), "John");
    }

    #[test]
    fn test_long_translation_code() {
        let message = extract("!bibel LUTHER 1. Mose 1,1").unwrap();
        assert_eq!(message.command, Command::Bibel);
        assert_eq!(message.translation.as_deref(), Some("LUTHER"));
        assert_eq!(message.reference.book.as_str(), "Genesis");
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let message = extract("!BIBLE Gen 1:1").unwrap();
        assert_eq!(message.command, Command::Bible);
    }

    #[test]
    fn test_no_match_outcomes() {
        for input in [
            "",
            "!nonsense",
            "!bible",
            "!bible    ",
            "!bibles Gen 1:1",
            "just some text",
            "!bible notabook 1:1",
            "!bible KJV notabook 1:1",
        ] {
            assert!(extract(input).is_none(), "expected None for {input:?}");
        }
    }

    #[test]
    fn test_lowercase_code_is_not_split_off() {
        // a lowercase token is not an all-caps code, so the second pass
        // cannot rescue the unparseable remainder
        assert!(extract("!bible kjv NotABook 1:1").is_none());
    }

    #[test]
    fn test_split_translation_code_bounds() {
        assert_eq!(
            split_translation_code("KJV Gen 1:1"),
            Some(("KJV", "Gen 1:1"))
        );
        assert_eq!(split_translation_code("A Gen 1:1"), None);
        assert_eq!(split_translation_code("ABCDEFGHIJK Gen 1:1"), None);
        assert_eq!(split_translation_code("KJV"), None);
    }
}
