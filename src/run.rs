//! Command dispatch for both binaries: logger init, item commands, chat commands.

use std::io::{BufRead, Read, Write};

use crate::cli::{ChatCommand, ItemsCommand, LogArgs};
use crate::core::chat::{self, ChatSession};
use crate::core::error::AppError;
use crate::core::items;
use crate::core::llm::Completion;
use crate::core::store::{HistoryStore, ItemStore};

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q level.
pub fn init_logger(log: &LogArgs) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log.log_level()),
    )
    .try_init();
}

/// Resolve a prompt argument: `-` reads all of `stdin`. Trimmed; empty is a usage error.
pub fn prompt_text<R: Read>(arg: &str, mut stdin: R) -> Result<String, AppError> {
    let raw = if arg == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err(AppError::Usage("empty prompt".to_string()));
    }
    Ok(prompt.to_string())
}

/// Run one `gpt-items` command: load, mutate, save, print.
///
/// Nothing is saved unless the whole command succeeds.
pub async fn run_items<C, R, W>(
    command: ItemsCommand,
    store: &ItemStore,
    client: &C,
    stdin: R,
    out: &mut W,
) -> Result<(), AppError>
where
    C: Completion,
    R: Read,
    W: Write,
{
    match command {
        ItemsCommand::Create { prompt } => {
            let prompt = prompt_text(&prompt, stdin)?;
            let mut list = store.load()?;
            let created = items::create(&mut list, &prompt, client).await?;
            store.save(&list)?;
            writeln!(out, "Created item {}", created.id)?;
        }
        ItemsCommand::List => {
            for item in store.load()? {
                writeln!(out, "{}", items::format_line(&item))?;
            }
        }
        ItemsCommand::Update { id, prompt } => {
            let prompt = prompt_text(&prompt, stdin)?;
            let mut list = store.load()?;
            let updated = items::update(&mut list, id, &prompt, client).await?;
            store.save(&list)?;
            writeln!(out, "Updated item {}", updated.id)?;
        }
        ItemsCommand::Delete { id } => {
            let mut list = store.load()?;
            items::delete(&mut list, id)?;
            store.save(&list)?;
            writeln!(out, "Deleted item {}", id)?;
        }
        ItemsCommand::Completions { .. } => {
            return Err(AppError::Usage(
                "completions are handled before dispatch".to_string(),
            ));
        }
    }
    Ok(())
}

/// Run one `gpt-chat` command. `chat` reads turns from `input` until exit or EOF.
pub async fn run_chat<C, R, W>(
    command: ChatCommand,
    store: &HistoryStore,
    client: &C,
    max_history: Option<usize>,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    C: Completion,
    R: BufRead,
    W: Write,
{
    match command {
        ChatCommand::Chat => {
            let mut session = ChatSession::open(store, client, max_history)?;
            session.interact(input, out).await?;
        }
        ChatCommand::History => {
            for message in store.load()? {
                writeln!(out, "{}", chat::format_line(&message))?;
            }
        }
        ChatCommand::Clear => {
            store.clear()?;
            writeln!(out, "History cleared")?;
        }
        ChatCommand::Completions { .. } => {
            return Err(AppError::Usage(
                "completions are handled before dispatch".to_string(),
            ));
        }
    }
    Ok(())
}
