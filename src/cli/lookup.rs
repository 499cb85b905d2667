use clap::Args;

use crate::api::BibleApiClient;
use crate::cli::OutputFormat;
use crate::core::types::Language;
use crate::parsing::reference::ReferenceParser;
use crate::registry::store::BookRegistry;
use crate::registry::translations;

#[derive(Args)]
pub struct LookupArgs {
    /// Reference text, e.g. "Gen 1:1-3" or "1. Mose 5,14"
    #[arg(required = true, num_args = 1..)]
    pub reference: Vec<String>,

    /// Translation code (e.g. KJV) or a raw API.Bible edition id
    #[arg(short, long)]
    pub translation: Option<String>,

    /// Default to the German edition when no translation is given
    #[arg(long)]
    pub german: bool,

    /// API key (falls back to the BIBLE_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Execute the lookup subcommand
///
/// # Errors
///
/// Returns an error when the text does not parse, no API key is configured,
/// or the passage fetch fails.
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = BookRegistry::new();
    let parser = ReferenceParser::new(&registry);

    let text = args.reference.join(" ");
    let Some(reference) = parser.parse(&text) else {
        anyhow::bail!("could not parse {text:?} as a Bible reference");
    };

    let language = if args.german {
        Language::German
    } else {
        Language::English
    };
    let bible_id = translations::resolve_bible_id(args.translation.as_deref(), language);

    if verbose {
        eprintln!("Fetching {reference} from edition {bible_id}");
    }

    let api_key = super::resolve_api_key(args.api_key.as_deref())?;
    let client = BibleApiClient::new(&api_key)?;

    let rt = tokio::runtime::Runtime::new()?;
    let passage = rt.block_on(client.passage(bible_id, &reference, &registry))?;

    match format {
        OutputFormat::Text => {
            println!("{} ({})", passage.reference, passage.translation);
            println!();
            println!("{}", passage.text);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reference": passage.reference,
                "translation": passage.translation,
                "text": passage.text,
                "api_token": reference.api_token(&registry),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
