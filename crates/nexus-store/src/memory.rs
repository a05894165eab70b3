use crate::error::{Result, StoreError};
use crate::store::ConversationStore;
use async_trait::async_trait;
use nexus_types::{Message, Thread, ThreadId, Topic};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    threads: Vec<Thread>,
    messages: HashMap<ThreadId, Vec<Message>>,
    active: Option<ThreadId>,
}

impl Inner {
    fn thread_mut(&mut self, id: ThreadId) -> Result<&mut Thread> {
        self.threads
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::ThreadNotFound(id))
    }

    fn mark_active(&mut self, id: ThreadId) {
        for thread in &mut self.threads {
            thread.is_active = thread.id == id;
        }
        self.active = Some(id);
    }

    /// Most recently active thread, used when the active one goes away.
    fn most_recent(&self) -> Option<ThreadId> {
        self.threads
            .iter()
            .max_by_key(|t| t.last_activity)
            .map(|t| t.id)
    }
}

/// In-memory conversation store.
///
/// All state is process-local; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn create_thread(&self) -> Result<Thread> {
        let mut inner = self.inner.write().await;
        let thread = Thread::new();
        tracing::debug!(thread_id = %thread.id, "creating thread");

        inner.messages.insert(thread.id, Vec::new());
        inner.threads.push(thread.clone());
        inner.mark_active(thread.id);
        Ok(thread)
    }

    async fn get_thread(&self, id: ThreadId) -> Result<Option<Thread>> {
        let inner = self.inner.read().await;
        Ok(inner.threads.iter().find(|t| t.id == id).cloned())
    }

    async fn list_threads(&self) -> Result<Vec<Thread>> {
        let inner = self.inner.read().await;
        let mut threads = inner.threads.clone();
        threads.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        Ok(threads)
    }

    async fn delete_thread(&self, id: ThreadId) -> Result<Option<ThreadId>> {
        let mut inner = self.inner.write().await;
        let before = inner.threads.len();
        inner.threads.retain(|t| t.id != id);
        if inner.threads.len() == before {
            return Err(StoreError::ThreadNotFound(id));
        }
        inner.messages.remove(&id);
        tracing::debug!(thread_id = %id, "deleted thread");

        if inner.active == Some(id) {
            match inner.most_recent() {
                Some(next) => inner.mark_active(next),
                None => inner.active = None,
            }
        }
        Ok(inner.active)
    }

    async fn set_active(&self, id: ThreadId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.thread_mut(id)?;
        inner.mark_active(id);
        Ok(())
    }

    async fn active_thread(&self) -> Result<Option<ThreadId>> {
        let inner = self.inner.read().await;
        Ok(inner.active)
    }

    async fn append_message(&self, thread_id: ThreadId, message: Message) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.thread_mut(thread_id)?.record_message(&message);
        inner.messages.entry(thread_id).or_default().push(message);
        Ok(())
    }

    async fn messages(&self, thread_id: ThreadId) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        if !inner.threads.iter().any(|t| t.id == thread_id) {
            return Err(StoreError::ThreadNotFound(thread_id));
        }
        Ok(inner.messages.get(&thread_id).cloned().unwrap_or_default())
    }

    async fn set_topic(&self, id: ThreadId, topic: Topic) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.thread_mut(id)?.topic = topic;
        Ok(())
    }
}
