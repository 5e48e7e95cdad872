//! Context window: which part of the transcript is resent on each turn.

use crate::core::message::{Message, Role};

/// The trailing slice of `messages` to send to the API.
///
/// `None` sends everything. Otherwise keeps the last `max` messages, then drops
/// leading assistant turns so the window opens on a user message. The last
/// message is always kept.
pub fn window(messages: &[Message], max: Option<usize>) -> &[Message] {
    let Some(max) = max else {
        return messages;
    };
    if messages.len() <= max {
        return messages;
    }
    let last = messages.len() - 1;
    let mut start = messages.len() - max.max(1);
    while start < last && messages[start].role == Role::Assistant {
        start += 1;
    }
    &messages[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(turns: usize) -> Vec<Message> {
        (0..turns)
            .flat_map(|i| {
                [
                    Message::user(format!("q{}", i)),
                    Message::assistant(format!("a{}", i)),
                ]
            })
            .collect()
    }

    #[test]
    fn unlimited_returns_everything() {
        let messages = transcript(3);
        assert_eq!(window(&messages, None).len(), 6);
    }

    #[test]
    fn short_transcript_is_untouched() {
        let messages = transcript(1);
        assert_eq!(window(&messages, Some(10)), &messages[..]);
    }

    #[test]
    fn keeps_tail_starting_on_user() {
        let mut messages = transcript(3);
        messages.push(Message::user("latest"));
        // last 4 would start at "a1"; the window skips it
        let w = window(&messages, Some(4));
        assert_eq!(w.len(), 3);
        assert_eq!(w[0].content, "q2");
        assert_eq!(w[2].content, "latest");
    }

    #[test]
    fn zero_still_keeps_last_message() {
        let mut messages = transcript(2);
        messages.push(Message::user("latest"));
        let w = window(&messages, Some(0));
        assert_eq!(w, &[Message::user("latest")]);
    }
}
