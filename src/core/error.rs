//! Top-level error for a command invocation.

use std::io;

use crate::core::llm::ChatError;
use crate::core::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("item {0} not found")]
    NotFound(u64),
    #[error("{0}")]
    Usage(String),
    /// Console read/write failure.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(AppError::NotFound(7).to_string(), "item 7 not found");
    }

    #[test]
    fn chat_errors_display_transparently() {
        let err: AppError = ChatError::EmptyResponse.into();
        assert_eq!(err.to_string(), "no choices returned");
    }
}
