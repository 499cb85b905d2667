use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod bot;
mod cli;
mod core;
mod parsing;
mod registry;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("verse_resolver=debug,info")
    } else {
        EnvFilter::new("verse_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Books(args) => {
            cli::books::run(args, cli.format)?;
        }
        cli::Commands::Translations(args) => {
            cli::translations::run(args, cli.format)?;
        }
        cli::Commands::VerifyKey(args) => {
            cli::translations::run_verify(args)?;
        }
        cli::Commands::Chat(args) => {
            cli::chat::run(args)?;
        }
    }

    Ok(())
}
