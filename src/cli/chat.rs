use std::io::BufRead;

use clap::Args;

use crate::api::BibleApiClient;
use crate::bot::Responder;
use crate::registry::store::BookRegistry;

#[derive(Args)]
pub struct ChatArgs {
    /// API key (falls back to the BIBLE_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Execute the chat subcommand: a stdin/stdout harness around the responder
///
/// Each input line is handled like an incoming chat message; lines the bot
/// would ignore produce no output.
///
/// # Errors
///
/// Returns an error when no API key is configured or stdin cannot be read.
pub fn run(args: ChatArgs) -> anyhow::Result<()> {
    let api_key = super::resolve_api_key(args.api_key.as_deref())?;
    let responder = Responder::new(BookRegistry::new(), BibleApiClient::new(&api_key)?);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        println!("Type a command like `!bible Gen 1:1` (Ctrl-D to quit)");

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if let Some(reply) = responder.respond(&line).await {
                println!("{reply}");
            }
        }

        Ok(())
    })
}
