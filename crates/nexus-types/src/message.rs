use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// Coarse affect tag attached to assistant messages.
///
/// Used only for cosmetic avatar/UI changes downstream; it carries no
/// semantics inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Analytical,
    Professional,
    Positive,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Analytical => "analytical",
            Self::Professional => "professional",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attachment metadata carried on a message.
///
/// Attachments are accepted but never transmitted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_uri: Option<String>,
}

impl Attachment {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            preview_uri: None,
        }
    }

    pub fn with_preview(mut self, uri: impl Into<String>) -> Self {
        self.preview_uri = Some(uri.into());
        self
    }
}

/// A single message within a thread.
///
/// Timestamps are assigned at construction, so insertion order within a
/// thread equals chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            author: Author::User,
            timestamp: Utc::now(),
            tone: None,
            attachments,
        }
    }

    /// Create an assistant message with a tone tag.
    pub fn assistant(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            author: Author::Assistant,
            timestamp: Utc::now(),
            tone: Some(tone),
            attachments: Vec::new(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    /// Single-line preview used for thread metadata.
    pub fn preview(&self) -> String {
        const MAX: usize = 80;
        let line = self.text.lines().next().unwrap_or_default();
        match line.char_indices().nth(MAX) {
            Some((idx, _)) => format!("{}...", &line[..idx]),
            None => line.to_string(),
        }
    }
}

/// User input prior to submission: text plus optional attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Draft {
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Draft {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// A draft is empty when its trimmed text is empty and it carries no
    /// attachments. Empty drafts are rejected silently on submit.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }
}

impl From<&str> for Draft {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_no_tone() {
        let msg = Message::user("hello", Vec::new());
        assert_eq!(msg.author, Author::User);
        assert!(msg.tone.is_none());
        assert!(msg.is_user());
    }

    #[test]
    fn assistant_message_carries_tone() {
        let msg = Message::assistant("hi there", Tone::Friendly);
        assert_eq!(msg.author, Author::Assistant);
        assert_eq!(msg.tone, Some(Tone::Friendly));
        assert!(!msg.is_user());
    }

    #[test]
    fn preview_truncates_long_first_line() {
        let long = "x".repeat(200);
        let msg = Message::user(long, Vec::new());
        let preview = msg.preview();
        assert!(preview.len() < 90);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_uses_first_line_only() {
        let msg = Message::assistant("first line\nsecond line", Tone::Neutral);
        assert_eq!(msg.preview(), "first line");
    }

    #[test]
    fn draft_emptiness() {
        assert!(Draft::text("   \t ").is_empty());
        assert!(!Draft::text("hi").is_empty());

        let with_attachment = Draft::text("")
            .with_attachments(vec![Attachment::new("notes.txt", 12, "text/plain")]);
        assert!(!with_attachment.is_empty());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::assistant("reply", Tone::Analytical);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"author\":\"assistant\""));
        assert!(json.contains("\"tone\":\"analytical\""));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, msg.id);
        assert_eq!(back.tone, Some(Tone::Analytical));
    }
}
