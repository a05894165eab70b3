use chrono::{DateTime, Utc};
use nexus_types::{Thread, Topic};

/// Ordering applied to a filtered thread list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadSort {
    /// Most recent activity first.
    #[default]
    Recent,
    /// Least recent activity first.
    Oldest,
    /// Most messages first.
    Longest,
    /// Fewest messages first.
    Shortest,
}

/// Filter and ordering for the conversation history list.
///
/// `Default` matches every thread in recency order, which is what
/// [`list_threads`](crate::ConversationStore::list_threads) already
/// returns; narrow it with the builder methods.
#[derive(Debug, Clone, Default)]
pub struct ThreadQuery {
    search: Option<String>,
    topic: Option<Topic>,
    since: Option<DateTime<Utc>>,
    min_messages: Option<usize>,
    max_messages: Option<usize>,
    sort: ThreadSort,
}

impl ThreadQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive match against the last-message preview and the
    /// topic label.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    /// Keep only threads with activity at or after the cutoff.
    pub fn since(mut self, cutoff: DateTime<Utc>) -> Self {
        self.since = Some(cutoff);
        self
    }

    pub fn min_messages(mut self, count: usize) -> Self {
        self.min_messages = Some(count);
        self
    }

    pub fn max_messages(mut self, count: usize) -> Self {
        self.max_messages = Some(count);
        self
    }

    pub fn sort(mut self, sort: ThreadSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, thread: &Thread) -> bool {
        if let Some(query) = &self.search {
            let needle = query.to_lowercase();
            let in_preview = thread.last_message.to_lowercase().contains(&needle);
            let in_label = thread.topic.label().to_lowercase().contains(&needle);
            if !in_preview && !in_label {
                return false;
            }
        }
        if self.topic.is_some_and(|t| t != thread.topic) {
            return false;
        }
        if self.since.is_some_and(|cutoff| thread.last_activity < cutoff) {
            return false;
        }
        if self.min_messages.is_some_and(|min| thread.message_count < min) {
            return false;
        }
        if self.max_messages.is_some_and(|max| thread.message_count > max) {
            return false;
        }
        true
    }

    /// Filter and reorder a thread list in place.
    pub fn apply(&self, mut threads: Vec<Thread>) -> Vec<Thread> {
        threads.retain(|t| self.matches(t));
        match self.sort {
            ThreadSort::Recent => threads.sort_by(|a, b| b.last_activity.cmp(&a.last_activity)),
            ThreadSort::Oldest => threads.sort_by(|a, b| a.last_activity.cmp(&b.last_activity)),
            ThreadSort::Longest => threads.sort_by(|a, b| b.message_count.cmp(&a.message_count)),
            ThreadSort::Shortest => threads.sort_by(|a, b| a.message_count.cmp(&b.message_count)),
        }
        threads
    }
}
