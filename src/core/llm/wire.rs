//! Request and response bodies of the `/chat/completions` endpoint.

use serde::{Deserialize, Serialize};

use crate::core::message::Message;

use super::ChatError;

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletion {
    /// Text of the first choice, verbatim.
    pub fn into_first_reply(self) -> Result<String, ChatError> {
        if self.choices.len() > 1 {
            log::debug!("{} choices returned, using the first", self.choices.len());
        }
        let first = self
            .choices
            .into_iter()
            .next()
            .ok_or(ChatError::EmptyResponse)?;
        first.message.content.ok_or_else(|| {
            log::warn!("first choice has no text content");
            ChatError::EmptyResponse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatCompletion {
        serde_json::from_str(body).expect("valid completion")
    }

    #[test]
    fn request_serializes_model_and_messages() {
        let messages = [Message::user("hi")];
        let body = serde_json::to_value(ChatRequest {
            model: "gpt-4o",
            messages: &messages,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn first_reply_is_verbatim() {
        let completion = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"  hello\n"}},
                           {"message":{"content":"second"}}]}"#,
        );
        assert_eq!(completion.into_first_reply().unwrap(), "  hello\n");
    }

    #[test]
    fn no_choices_is_empty_response() {
        let err = parse(r#"{"choices":[]}"#).into_first_reply().unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));
    }

    #[test]
    fn missing_choices_field_is_empty_response() {
        let err = parse(r#"{"id":"x"}"#).into_first_reply().unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));
    }

    #[test]
    fn null_content_is_empty_response() {
        let err = parse(r#"{"choices":[{"message":{"content":null}}]}"#)
            .into_first_reply()
            .unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));
    }
}
