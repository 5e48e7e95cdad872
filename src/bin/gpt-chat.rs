//! `gpt-chat`: one running conversation kept in `./history.json`.

use std::io;

use clap::Parser;
use dotenv::dotenv;

use gpt_cli::cli::{self, ChatArgs, ChatCommand};
use gpt_cli::core::config;
use gpt_cli::core::llm::OpenAiClient;
use gpt_cli::core::store::HistoryStore;
use gpt_cli::run;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = ChatArgs::parse();
    run::init_logger(&args.log);

    if let ChatCommand::Completions { shell } = args.command {
        cli::write_completions::<ChatArgs>(shell, &mut io::stdout());
        return;
    }

    // The credential is checked before any file or network access.
    let config = config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let client = OpenAiClient::new(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let store = HistoryStore::default_history();
    let result = run::run_chat(
        args.command,
        &store,
        &client,
        config.max_history,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )
    .await;
    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
