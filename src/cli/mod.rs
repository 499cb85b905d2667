//! Command-line interface for verse-resolver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Parse a reference and print its normalized forms (offline)
//! - **lookup**: Fetch the text of a passage from API.Bible
//! - **books**: Inspect the built-in book registry
//! - **translations**: List the available Bible editions
//! - **verify-key**: Check that the configured API key is accepted
//! - **chat**: Read chat messages from stdin and print the bot's replies
//!
//! ## Usage
//!
//! ```text
//! # Parse without touching the network
//! verse-resolver parse "1. Mose 5,14"
//!
//! # JSON output for scripting
//! verse-resolver parse "Matt 5:3-7:12" --format json
//!
//! # Fetch a passage (BIBLE_API_KEY from the environment)
//! verse-resolver lookup "Gen 1:1-3" --translation KJV
//!
//! # See which editions are available in German
//! verse-resolver translations --language deu
//!
//! # Drive the chat responder interactively
//! verse-resolver chat
//! ```

use clap::{Parser, Subcommand};

pub mod books;
pub mod chat;
pub mod lookup;
pub mod parse;
pub mod translations;

#[derive(Parser)]
#[command(name = "verse-resolver")]
#[command(version)]
#[command(about = "Resolve Bible references and fetch passages from API.Bible")]
#[command(
    long_about = "verse-resolver resolves free-text Bible citations in English and German conventions.\n\nIt normalizes book names and abbreviations (\"Gen\", \"1. Mose\", \"Matthäus\"), handles verse and cross-chapter ranges, and renders both a display string and the passage token used by the API.Bible service. The lookup, translations and chat commands talk to API.Bible and need an API key."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a reference and print its normalized forms (offline)
    Parse(parse::ParseArgs),

    /// Fetch the text of a passage from API.Bible
    Lookup(lookup::LookupArgs),

    /// Inspect the built-in book registry
    Books(books::BooksArgs),

    /// List the Bible editions available through the API
    Translations(translations::TranslationsArgs),

    /// Check that the configured API key is accepted
    VerifyKey(translations::VerifyKeyArgs),

    /// Read chat messages from stdin and print the bot's replies
    Chat(chat::ChatArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve the API key from a flag value or the `BIBLE_API_KEY` environment
/// variable
pub(crate) fn resolve_api_key(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(key) = flag {
        return Ok(key.to_string());
    }

    std::env::var("BIBLE_API_KEY")
        .map_err(|_| anyhow::anyhow!("no API key given: pass --api-key or set BIBLE_API_KEY"))
}
