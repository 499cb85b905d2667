use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::core::types::Testament;
use crate::registry::store::BookRegistry;

#[derive(Args)]
pub struct BooksArgs {
    #[command(subcommand)]
    pub command: BooksCommands,
}

#[derive(Subcommand)]
pub enum BooksCommands {
    /// List all canonical books with their external codes
    List {
        /// Only show one testament
        #[arg(long, value_enum)]
        testament: Option<TestamentFilter>,
    },

    /// Resolve a name or alias and show the book's details
    Show {
        /// Book name or alias, e.g. "Gen" or "1. Mose"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TestamentFilter {
    Old,
    New,
}

impl From<TestamentFilter> for Testament {
    fn from(filter: TestamentFilter) -> Self {
        match filter {
            TestamentFilter::Old => Testament::Old,
            TestamentFilter::New => Testament::New,
        }
    }
}

/// Execute the books subcommand
///
/// # Errors
///
/// `show` returns an error when the name does not resolve to a book.
pub fn run(args: BooksArgs, format: OutputFormat) -> anyhow::Result<()> {
    let registry = BookRegistry::new();

    match args.command {
        BooksCommands::List { testament } => {
            let filter: Option<Testament> = testament.map(Into::into);
            let books: Vec<_> = registry
                .books()
                .filter(|book| filter.map_or(true, |t| book.testament == t))
                .collect();

            match format {
                OutputFormat::Text => {
                    for book in &books {
                        println!("{:<4} {}", book.code, book.name);
                    }
                    println!("\n{} of {} books", books.len(), registry.len());
                }
                OutputFormat::Json => {
                    let output: Vec<_> = books
                        .iter()
                        .map(|book| {
                            serde_json::json!({
                                "name": book.name,
                                "code": book.code,
                                "testament": book.testament,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
        BooksCommands::Show { name } => {
            let text = name.join(" ");
            let Some(book) = registry.normalize(&text) else {
                anyhow::bail!("{text:?} is not a recognized book name or alias");
            };
            // normalize only produces canonical names, so the row exists
            let Some(entry) = registry.get(&book) else {
                anyhow::bail!("{book} has no registry entry");
            };

            match format {
                OutputFormat::Text => {
                    println!("{}", entry.name);
                    println!("   Code: {}", entry.code);
                    println!("   Testament: {}", entry.testament);
                }
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "name": entry.name,
                        "code": entry.code,
                        "testament": entry.testament,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
    }

    Ok(())
}
