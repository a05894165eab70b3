use crate::message::Message;
use crate::thread::{Thread, ThreadId};
use crate::topic::Topic;
use serde::{Deserialize, Serialize};

/// Events streamed from a running chat session.
///
/// The session actor emits these over an mpsc channel as state changes,
/// so a frontend can render entirely from the event stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A user message was accepted and appended.
    Submitted {
        thread_id: ThreadId,
        message: Message,
    },

    /// A submit arrived while a turn was in flight; it will run later.
    TurnQueued {
        position: usize,
    },

    /// The assistant "started typing" (a simulated reply is scheduled).
    TypingStarted,

    /// The scheduled reply was committed.
    ReplyDelivered {
        thread_id: ThreadId,
        message: Message,
    },

    /// The assistant "stopped typing".
    TypingStopped,

    /// The classifier re-labeled the conversation.
    TopicChanged {
        topic: Topic,
    },

    /// Smart suggestions were shown or hidden.
    SuggestionsVisible {
        visible: bool,
    },

    ThreadCreated {
        thread: Thread,
    },

    /// A thread was selected; its stored history is replayed.
    ThreadSelected {
        thread_id: ThreadId,
        messages: Vec<Message>,
    },

    /// A thread was deleted; `active` names the thread activated in its
    /// place, if any remain.
    ThreadDeleted {
        thread_id: ThreadId,
        active: Option<ThreadId>,
    },

    /// A non-fatal failure surfaced by the session.
    Error {
        message: String,
    },

    /// The session shut down; no further events follow.
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_snake_case() {
        let json = serde_json::to_string(&SessionEvent::TypingStarted).unwrap();
        assert_eq!(json, r#"{"type":"typing_started"}"#);

        let json = serde_json::to_string(&SessionEvent::SuggestionsVisible { visible: false })
            .unwrap();
        assert!(json.contains(r#""type":"suggestions_visible""#));
        assert!(json.contains(r#""visible":false"#));
    }

    #[test]
    fn delivered_event_roundtrip() {
        let event = SessionEvent::ReplyDelivered {
            thread_id: ThreadId::new(),
            message: Message::assistant("done", crate::Tone::Neutral),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, SessionEvent::ReplyDelivered { .. }));
    }
}
