use crate::message::Message;
use crate::topic::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique thread identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(pub Uuid);

impl ThreadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An independent conversation context with denormalized metadata.
///
/// `last_message`, `last_activity` and `message_count` are maintained by
/// the store on every append; `topic` is updated by the classifier as
/// user messages arrive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub topic: Topic,
    pub last_message: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub message_count: usize,
    pub is_active: bool,
}

impl Thread {
    /// Create an empty thread. New threads start active.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: ThreadId::new(),
            topic: Topic::General,
            last_message: "Starting new conversation...".to_string(),
            created_at: now,
            last_activity: now,
            message_count: 0,
            is_active: true,
        }
    }

    /// Fold a newly appended message into the denormalized metadata.
    pub fn record_message(&mut self, message: &Message) {
        self.last_message = message.preview();
        self.last_activity = message.timestamp;
        self.message_count += 1;
    }
}

impl Default for Thread {
    fn default() -> Self {
        Self::new()
    }
}
