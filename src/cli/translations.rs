use std::collections::BTreeMap;

use clap::Args;

use crate::api::models::BibleSummary;
use crate::api::BibleApiClient;
use crate::cli::OutputFormat;
use crate::registry::translations;

#[derive(Args)]
pub struct TranslationsArgs {
    /// Only show editions for one language (ISO 639-3 id, e.g. "eng" or "deu")
    #[arg(short, long)]
    pub language: Option<String>,

    /// API key (falls back to the BIBLE_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Execute the translations subcommand
///
/// # Errors
///
/// Returns an error when no API key is configured or the listing fetch
/// fails.
pub fn run(args: TranslationsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let api_key = super::resolve_api_key(args.api_key.as_deref())?;
    let client = BibleApiClient::new(&api_key)?;

    let rt = tokio::runtime::Runtime::new()?;
    let bibles: Vec<BibleSummary> = rt.block_on(async {
        match &args.language {
            Some(language_id) => client.bibles_for_language(language_id).await,
            None => client.available_bibles().await.map(<[_]>::to_vec),
        }
    })?;

    if bibles.is_empty() {
        println!("No editions found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_grouped(&bibles),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bibles)?),
    }

    Ok(())
}

/// Group editions by language, German and English first
fn print_grouped(bibles: &[BibleSummary]) {
    let mut by_language: BTreeMap<&str, Vec<&BibleSummary>> = BTreeMap::new();
    for bible in bibles {
        by_language
            .entry(bible.language.name.as_str())
            .or_default()
            .push(bible);
    }

    let mut ordered: Vec<&str> = Vec::with_capacity(by_language.len());
    for preferred in ["German", "English"] {
        if by_language.contains_key(preferred) {
            ordered.push(preferred);
        }
    }
    ordered.extend(
        by_language
            .keys()
            .copied()
            .filter(|name| *name != "German" && *name != "English"),
    );

    for language in ordered {
        println!("{language}:");
        for bible in &by_language[language] {
            let label = translations::display_name(&bible.id)
                .map(str::to_string)
                .or_else(|| bible.abbreviation.clone())
                .unwrap_or_else(|| "?".to_string());
            println!("  {:<12} {}  (id: {})", label, bible.name, bible.id);
        }
        println!();
    }
}

#[derive(Args)]
pub struct VerifyKeyArgs {
    /// API key (falls back to the BIBLE_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Execute the verify-key subcommand
///
/// # Errors
///
/// Returns an error when no API key is configured or the key is rejected.
pub fn run_verify(args: VerifyKeyArgs) -> anyhow::Result<()> {
    let api_key = super::resolve_api_key(args.api_key.as_deref())?;
    let client = BibleApiClient::new(&api_key)?;

    let rt = tokio::runtime::Runtime::new()?;
    let bibles = rt.block_on(client.available_bibles())?;

    println!("API key accepted, {} editions available", bibles.len());
    Ok(())
}
