use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::reference::ReferenceParser;
use crate::registry::store::BookRegistry;

#[derive(Args)]
pub struct ParseArgs {
    /// Reference text, e.g. "Gen 1:1" or "1. Mose 5,14"
    #[arg(required = true, num_args = 1..)]
    pub reference: Vec<String>,
}

/// Execute the parse subcommand
///
/// # Errors
///
/// Returns an error when the text does not parse as a reference.
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = BookRegistry::new();
    let parser = ReferenceParser::new(&registry);

    let text = args.reference.join(" ");
    let Some(reference) = parser.parse(&text) else {
        anyhow::bail!("could not parse {text:?} as a Bible reference");
    };

    let token = reference.api_token(&registry);

    match format {
        OutputFormat::Text => {
            println!("{reference}");
            if let Some(token) = &token {
                println!("API token: {token}");
            }
            if verbose {
                if let Some(entry) = registry.get(&reference.book) {
                    eprintln!("{} ({}, {})", entry.name, entry.code, entry.testament);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "display": reference.to_string(),
                "api_token": token,
                "reference": reference,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
