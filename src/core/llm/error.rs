//! Completion client error types.

/// Errors from a single completion request.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// DNS, connect, TLS or body-read failure. No HTTP status was obtained.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Non-success HTTP status. `body` is the raw response text.
    #[error("API error ({status}): {}", describe_body(.body))]
    Api { status: u16, body: String },
    /// Success status, but the body is not a chat completion.
    #[error("invalid API response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    /// Success status, but no choice carried text content.
    #[error("no choices returned")]
    EmptyResponse,
}

/// The `error.message` field of an API error body, when the body is the usual JSON envelope.
fn api_message(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Error body for display: the envelope's message first when there is one, raw body always.
fn describe_body(body: &str) -> String {
    match api_message(body) {
        Some(message) => format!("{} (raw: {})", message, body),
        None => body.to_string(),
    }
}
