//! `gpt-items`: prompt/response items kept in `./data.json`.

use std::io;

use clap::Parser;
use dotenv::dotenv;

use gpt_cli::cli::{self, ItemsArgs, ItemsCommand};
use gpt_cli::core::config;
use gpt_cli::core::llm::OpenAiClient;
use gpt_cli::core::store::ItemStore;
use gpt_cli::run;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = ItemsArgs::parse();
    run::init_logger(&args.log);

    if let ItemsCommand::Completions { shell } = args.command {
        cli::write_completions::<ItemsArgs>(shell, &mut io::stdout());
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

    let store = ItemStore::default_items();
    let result = run::run_items(
        args.command,
        &store,
        &client,
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
