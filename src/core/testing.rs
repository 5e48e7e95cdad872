//! Test doubles shared by command tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::core::llm::{ChatError, Completion};
use crate::core::message::Message;

/// Completion stub: replays queued results and records every request.
#[derive(Default)]
pub struct StubCompletion {
    replies: Mutex<VecDeque<Result<String, ChatError>>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl StubCompletion {
    pub fn replying(replies: &[&str]) -> Self {
        let stub = Self::default();
        for r in replies {
            stub.push(Ok(r.to_string()));
        }
        stub
    }

    pub fn failing(err: ChatError) -> Self {
        let stub = Self::default();
        stub.push(Err(err));
        stub
    }

    pub fn push(&self, reply: Result<String, ChatError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Completion for StubCompletion {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ChatError::EmptyResponse))
    }
}

/// Shorthand for the rate-limit failure used across tests.
pub fn rate_limited() -> ChatError {
    ChatError::Api {
        status: 429,
        body: "rate limited".to_string(),
    }
}
