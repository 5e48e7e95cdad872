//! Running conversation: one transcript, persisted after every exchange.

use std::io::{BufRead, Write};

use crate::core::error::AppError;
use crate::core::llm::{Completion, context};
use crate::core::message::Message;
use crate::core::store::HistoryStore;

/// Words that end the interactive loop.
pub const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Transcript loaded from a store plus the client that extends it.
pub struct ChatSession<'a, C> {
    store: &'a HistoryStore,
    client: &'a C,
    history: Vec<Message>,
    max_history: Option<usize>,
}

impl<'a, C: Completion> ChatSession<'a, C> {
    /// Load the transcript from `store`.
    pub fn open(
        store: &'a HistoryStore,
        client: &'a C,
        max_history: Option<usize>,
    ) -> Result<Self, AppError> {
        let history = store.load()?;
        Ok(Self {
            store,
            client,
            history,
            max_history,
        })
    }

    /// Send `input` with the transcript, then append both turns and save.
    ///
    /// On error nothing is appended and the file is not touched.
    pub async fn exchange(&mut self, input: &str) -> Result<String, AppError> {
        let mut outgoing = self.history.clone();
        outgoing.push(Message::user(input));
        let reply = self
            .client
            .complete(context::window(&outgoing, self.max_history))
            .await?;

        let mut next = outgoing;
        next.push(Message::assistant(reply.clone()));
        self.store.save(&next)?;
        self.history = next;
        log::debug!("transcript now {} messages", self.history.len());
        Ok(reply)
    }

    /// Read lines from `input` until an exit word or end of input, printing each reply.
    pub async fn interact<R, W>(&mut self, mut input: R, output: &mut W) -> Result<(), AppError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Enter 'exit' to quit.")?;
        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim();
            if EXIT_WORDS.contains(&text) {
                break;
            }
            if text.is_empty() {
                continue;
            }
            let reply = self.exchange(text).await?;
            writeln!(output, "{}", reply)?;
        }
        Ok(())
    }
}

/// One `history` output line.
pub fn format_line(message: &Message) -> String {
    format!("{}: {}", message.role, message.content)
}
