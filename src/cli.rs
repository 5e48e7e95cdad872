//! CLI definitions: argument parsing, subcommands, and help text for both binaries.

use std::io::Write;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

const ITEMS_AFTER_HELP: &str = "\
EXAMPLES:
  gpt-items create \"explain X\"      Ask once and store the reply as a new item
  gpt-items create -                Read the prompt from stdin
  gpt-items list                    Show all items
  gpt-items update 2 \"explain Y\"    Re-ask item 2 with a new prompt
  gpt-items delete 2                Remove item 2
  gpt-items completions bash        Generate bash completions

Items are kept in ./data.json. Requires OPENAI_API_KEY.
";

const CHAT_AFTER_HELP: &str = "\
EXAMPLES:
  gpt-chat chat                     Interactive conversation ('exit' to quit)
  gpt-chat history                  Print the conversation so far
  gpt-chat clear                    Forget the conversation
  gpt-chat completions zsh          Generate zsh completions

The conversation is kept in ./history.json. Requires OPENAI_API_KEY.
";

/// Log verbosity flags shared by both binaries.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl LogArgs {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

/// Arguments of `gpt-items`.
#[derive(Parser, Debug)]
#[command(
    name = "gpt-items",
    author,
    version,
    about = "Store prompts and their AI replies as numbered items",
    after_help = ITEMS_AFTER_HELP
)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommand,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
    /// Send a prompt and store the reply as a new item
    Create {
        /// Prompt text ('-' reads it from stdin)
        prompt: String,
    },
    /// List all items
    List,
    /// Re-send an item with a new prompt and replace its reply
    Update {
        /// Id of the item to update
        id: u64,
        /// New prompt text ('-' reads it from stdin)
        prompt: String,
    },
    /// Delete an item
    Delete {
        /// Id of the item to delete
        id: u64,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

/// Arguments of `gpt-chat`.
#[derive(Parser, Debug)]
#[command(
    name = "gpt-chat",
    author,
    version,
    about = "Hold one running conversation with an AI model",
    after_help = CHAT_AFTER_HELP
)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommand,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    /// Start an interactive conversation
    Chat,
    /// Print the conversation history
    History,
    /// Delete the conversation history
    Clear,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

/// Write the completion script for the binary described by `A`.
pub fn write_completions<A: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = A::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
