use crate::error::Result;
use crate::query::ThreadQuery;
use async_trait::async_trait;
use nexus_types::{Message, Thread, ThreadId, Topic};

/// Trait for conversation storage operations
///
/// Implementations own the thread list, the active-thread marker and the
/// per-thread message history. Message history is keyed by thread id, so
/// selecting a thread restores its real messages.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Create a new empty thread and make it active.
    async fn create_thread(&self) -> Result<Thread>;

    /// Get a thread by ID
    async fn get_thread(&self, id: ThreadId) -> Result<Option<Thread>>;

    /// List all threads, most recent activity first.
    async fn list_threads(&self) -> Result<Vec<Thread>>;

    /// Threads matching a history query, in its requested order.
    async fn query_threads(&self, query: &ThreadQuery) -> Result<Vec<Thread>> {
        Ok(query.apply(self.list_threads().await?))
    }

    /// Delete a thread and its history.
    ///
    /// If the deleted thread was active and others remain, the most
    /// recently active remaining thread becomes active; its id is
    /// returned. Deleting the last thread leaves no active thread.
    async fn delete_thread(&self, id: ThreadId) -> Result<Option<ThreadId>>;

    /// Mark a thread active, clearing the flag on all others.
    async fn set_active(&self, id: ThreadId) -> Result<()>;

    /// The currently active thread, if any.
    async fn active_thread(&self) -> Result<Option<ThreadId>>;

    /// Append a message to a thread, updating its denormalized metadata.
    async fn append_message(&self, thread_id: ThreadId, message: Message) -> Result<()>;

    /// All messages of a thread in insertion order.
    async fn messages(&self, thread_id: ThreadId) -> Result<Vec<Message>>;

    /// Re-label a thread's topic.
    async fn set_topic(&self, id: ThreadId, topic: Topic) -> Result<()>;
}
