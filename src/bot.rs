//! Chat-command responder.
//!
//! Platform-agnostic message-in/reply-out layer behind the `!bible` and
//! `!bibel` commands. The hosting chat integration owns event dispatch and
//! credentials; this module owns what the reply says, including the usage
//! hint for unparseable input and the outbound message length cap.

use tracing::info;

use crate::api::{ApiError, BibleApiClient};
use crate::core::types::Language;
use crate::parsing::command::CommandExtractor;
use crate::registry::store::BookRegistry;
use crate::registry::translations;

/// Outbound messages must not exceed this many characters (chat platform cap)
pub const MAX_MESSAGE_LEN: usize = 2000;

/// How many editions the list reply shows before the "and more" footer
const LIST_LIMIT: usize = 15;

/// Reply for commands whose reference could not be understood
pub const USAGE_HINT: &str = "\u{274c} I couldn't understand that reference. Please use a format like:\n\
    `!bible Gen 1:1` or `!bibel 1. Mose 5,14`\n\
    You can also specify a translation: `!bible KJV Gen 1:1`\n\
    To see available translations: `!bible list` or `!bibel list`";

/// Answers chat messages with passages, listings, or usage hints
pub struct Responder {
    registry: BookRegistry,
    api: BibleApiClient,
}

impl Responder {
    pub fn new(registry: BookRegistry, api: BibleApiClient) -> Self {
        Self { registry, api }
    }

    /// Produce the reply for one incoming message, or `None` when the
    /// message is not addressed to the bot
    pub async fn respond(&self, message: &str) -> Option<String> {
        let content = message.trim();
        if !content.starts_with("!bible") && !content.starts_with("!bibel") {
            return None;
        }

        if content == "!bible list" {
            return Some(self.translations_list(Language::English).await);
        }
        if content == "!bibel list" {
            return Some(self.translations_list(Language::German).await);
        }

        let extractor = CommandExtractor::new(&self.registry);
        let Some(parsed) = extractor.extract(content) else {
            return Some(USAGE_HINT.to_string());
        };

        let bible_id =
            translations::resolve_bible_id(parsed.translation.as_deref(), parsed.command.language());
        info!(reference = %parsed.reference, bible_id, "looking up passage");

        let reply = match self
            .api
            .passage(bible_id, &parsed.reference, &self.registry)
            .await
        {
            Ok(passage) => format!(
                "**{}** ({})\n\n{}",
                parsed.reference, passage.translation, passage.text
            ),
            Err(error) => format_error(&error),
        };

        Some(truncate_message(reply))
    }

    /// Formatted listing of available editions for one language
    async fn translations_list(&self, language: Language) -> String {
        // German editions are matched on the language display name, which
        // catches regional variants the bare ISO id misses
        let result = match language {
            Language::German => self.api.available_bibles().await.map(|all| {
                all.iter()
                    .filter(|bible| bible.language.name.contains("German"))
                    .cloned()
                    .collect::<Vec<_>>()
            }),
            Language::English => self.api.bibles_for_language(Language::English.iso_id()).await,
        };

        let bibles = match result {
            Ok(bibles) => bibles,
            Err(error) => return format_error(&error),
        };

        if bibles.is_empty() {
            return format!("\u{274c} No {language} translations found.");
        }

        let mut lines = vec![format!("**Available {language} Bible Translations:**\n")];
        for bible in bibles.iter().take(LIST_LIMIT) {
            let label = translations::display_name(&bible.id)
                .map(str::to_string)
                .or_else(|| bible.abbreviation.clone())
                .unwrap_or_else(|| "?".to_string());
            lines.push(format!("\u{2022} **{label}** - {}", shorten_name(&bible.name)));
        }

        if bibles.len() > LIST_LIMIT {
            lines.push(format!(
                "\n_...and {} more. Use `!bible <CODE> Gen 1:1` to try a translation._",
                bibles.len() - LIST_LIMIT
            ));
        }

        lines.join("\n")
    }
}

fn format_error(error: &ApiError) -> String {
    format!("\u{274c} {error}")
}

/// Long edition names are cut to keep the listing readable
fn shorten_name(name: &str) -> String {
    if name.chars().count() > 50 {
        let cut: String = name.chars().take(47).collect();
        format!("{cut}...")
    } else {
        name.to_string()
    }
}

/// Enforce the outbound message cap, truncating with an ellipsis
#[must_use]
pub fn truncate_message(text: String) -> String {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return text;
    }

    let mut cut: String = text.chars().take(MAX_MESSAGE_LEN - 3).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        // The key is only validated locally; no request is sent by the
        // paths exercised here
        Responder::new(BookRegistry::new(), BibleApiClient::new("test-key").unwrap())
    }

    #[tokio::test]
    async fn test_ignores_unaddressed_messages() {
        let responder = responder();
        assert_eq!(responder.respond("hello there").await, None);
        assert_eq!(responder.respond("!nonsense").await, None);
        assert_eq!(responder.respond("").await, None);
    }

    #[tokio::test]
    async fn test_usage_hint_for_bad_reference() {
        let responder = responder();
        let reply = responder.respond("!bible notabook").await.unwrap();
        assert_eq!(reply, USAGE_HINT);
    }

    #[test]
    fn test_truncate_under_limit() {
        let text = "short".to_string();
        assert_eq!(truncate_message(text.clone()), text);

        let exactly = "x".repeat(MAX_MESSAGE_LEN);
        assert_eq!(truncate_message(exactly.clone()), exactly);
    }

    #[test]
    fn test_truncate_over_limit() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        let truncated = truncate_message(long);
        assert_eq!(truncated.chars().count(), MAX_MESSAGE_LEN);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_shorten_name() {
        assert_eq!(shorten_name("Short Name"), "Short Name");
        let long = "a".repeat(60);
        let short = shorten_name(&long);
        assert_eq!(short.chars().count(), 50);
        assert!(short.ends_with("..."));
    }
}
