use crate::classify::Classifier;
use crate::config::EngineConfig;
use crate::latency::LatencyProfile;
use crate::provider::{Reply, ResponseProvider};
use anyhow::{anyhow, Result};
use nexus_store::ConversationStore;
use nexus_types::{Draft, Message, SessionEvent, Thread, ThreadId, Tone, Topic};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const GREETING: &str = "Hello! I'm your AI assistant. I'm here to help you with anything you need - \
from coding and analysis to creative projects and problem-solving. What would you like to explore today?";

/// Lifecycle of a single conversation turn.
///
/// `Delivered` loops back to `Idle` for the next turn; there is no error
/// state because the simulated generator cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Submitted,
    AwaitingResponse,
    Delivered,
}

/// Point-in-time view of the session for rendering.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: TurnPhase,
    pub typing: bool,
    pub topic: Topic,
    pub tone: Tone,
    pub suggestions_visible: bool,
    pub active_thread: Option<ThreadId>,
    pub threads: Vec<Thread>,
    /// Messages of the active thread, insertion order.
    pub messages: Vec<Message>,
    /// Turns waiting behind the in-flight one.
    pub queued_turns: usize,
}

enum Command {
    Submit(Draft),
    Regenerate { text: String },
    NewThread,
    SelectThread(ThreadId),
    DeleteThread(ThreadId),
    Snapshot(oneshot::Sender<SessionSnapshot>),
    /// Internal: a scheduled reply timer fired.
    Deliver { turn: u64, result: Result<Reply> },
    Shutdown,
}

enum Work {
    Submit(Draft),
    Regenerate { text: String },
}

struct PendingTurn {
    turn: u64,
    thread_id: ThreadId,
    handle: JoinHandle<()>,
}

/// Handle to a running chat session.
///
/// Cheap to clone; all mutation happens on the session's actor task.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    pub async fn submit(&self, draft: Draft) -> Result<()> {
        self.send(Command::Submit(draft)).await
    }

    /// Re-run generation for a prior message's text.
    pub async fn regenerate(&self, text: impl Into<String>) -> Result<()> {
        self.send(Command::Regenerate { text: text.into() }).await
    }

    pub async fn new_thread(&self) -> Result<()> {
        self.send(Command::NewThread).await
    }

    pub async fn select_thread(&self, id: ThreadId) -> Result<()> {
        self.send(Command::SelectThread(id)).await
    }

    pub async fn delete_thread(&self, id: ThreadId) -> Result<()> {
        self.send(Command::DeleteThread(id)).await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx)).await?;
        rx.await.map_err(|_| anyhow!("session closed"))
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| anyhow!("session closed"))
    }
}

/// The conversation simulation core.
///
/// `spawn` starts an actor task that owns every piece of mutable session
/// state; callers interact through the returned [`SessionHandle`] and
/// render from the [`SessionEvent`] stream.
pub struct ChatSession;

impl ChatSession {
    pub fn spawn(
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn ResponseProvider>,
        config: EngineConfig,
    ) -> (SessionHandle, mpsc::Receiver<SessionEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        let (event_tx, event_rx) = mpsc::channel(256);

        let actor = Actor {
            store,
            provider,
            config,
            classifier: Classifier::new(),
            phase: TurnPhase::Idle,
            typing: false,
            topic: Topic::General,
            tone: Tone::Neutral,
            suggestions_visible: true,
            queued: VecDeque::new(),
            pending: None,
            turn_counter: 0,
            cmd_tx: cmd_tx.downgrade(),
            events: event_tx,
        };
        tokio::spawn(actor.run(cmd_rx));

        (SessionHandle { tx: cmd_tx }, event_rx)
    }
}

struct Actor {
    store: Arc<dyn ConversationStore>,
    provider: Arc<dyn ResponseProvider>,
    config: EngineConfig,
    classifier: Classifier,
    phase: TurnPhase,
    typing: bool,
    topic: Topic,
    tone: Tone,
    suggestions_visible: bool,
    queued: VecDeque<Work>,
    pending: Option<PendingTurn>,
    turn_counter: u64,
    /// Weak so the command channel closes when the last [`SessionHandle`]
    /// drops; otherwise the actor would keep itself alive forever.
    cmd_tx: mpsc::WeakSender<Command>,
    events: mpsc::Sender<SessionEvent>,
}

impl Actor {
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        tracing::info!("chat session started");
        if let Err(e) = self.init().await {
            self.emit_error(e).await;
        }

        while let Some(command) = rx.recv().await {
            let outcome = match command {
                Command::Submit(draft) => self.handle_submit(draft).await,
                Command::Regenerate { text } => self.handle_regenerate(text).await,
                Command::NewThread => self.handle_new_thread().await,
                Command::SelectThread(id) => self.handle_select(id).await,
                Command::DeleteThread(id) => self.handle_delete(id).await,
                Command::Snapshot(reply_to) => self.handle_snapshot(reply_to).await,
                Command::Deliver { turn, result } => self.handle_deliver(turn, result).await,
                Command::Shutdown => break,
            };
            if let Err(e) = outcome {
                self.emit_error(e).await;
            }
        }

        self.abort_pending();
        self.emit(SessionEvent::Closed).await;
        tracing::info!("chat session closed");
    }

    /// Create the initial thread and, when configured, seed the greeting.
    async fn init(&mut self) -> Result<()> {
        let thread = self.store.create_thread().await?;
        if self.config.greeting_enabled {
            self.store
                .append_message(thread.id, Message::assistant(GREETING, Tone::Friendly))
                .await?;
        }
        self.emit(SessionEvent::ThreadCreated { thread }).await;
        Ok(())
    }

    async fn handle_submit(&mut self, draft: Draft) -> Result<()> {
        // empty trimmed text with no attachments: silent no-op
        if draft.is_empty() {
            tracing::debug!("ignoring empty draft");
            return Ok(());
        }
        if self.pending.is_some() {
            self.queued.push_back(Work::Submit(draft));
            let position = self.queued.len();
            tracing::debug!(position, "turn in flight, queueing submit");
            self.emit(SessionEvent::TurnQueued { position }).await;
            return Ok(());
        }
        self.start_submit(draft).await
    }

    async fn start_submit(&mut self, draft: Draft) -> Result<()> {
        let thread_id = self.ensure_active_thread().await?;
        let text = draft.text.trim().to_string();
        let message = Message::user(text.clone(), draft.attachments);
        self.store.append_message(thread_id, message.clone()).await?;

        self.phase = TurnPhase::Submitted;
        self.emit(SessionEvent::Submitted { thread_id, message }).await;

        let topic = self.classifier.classify(&text);
        if topic != self.topic {
            self.topic = topic;
            self.store.set_topic(thread_id, topic).await?;
            tracing::debug!(topic = %topic, "conversation re-labeled");
            self.emit(SessionEvent::TopicChanged { topic }).await;
        }

        self.set_typing(true).await;
        self.set_suggestions(false).await;
        self.schedule_reply(thread_id, text, self.config.chat_reply());
        Ok(())
    }

    async fn handle_regenerate(&mut self, text: String) -> Result<()> {
        if self.pending.is_some() {
            self.queued.push_back(Work::Regenerate { text });
            let position = self.queued.len();
            self.emit(SessionEvent::TurnQueued { position }).await;
            return Ok(());
        }
        self.start_regenerate(text).await
    }

    async fn start_regenerate(&mut self, text: String) -> Result<()> {
        let Some(thread_id) = self.store.active_thread().await? else {
            self.emit(SessionEvent::Error {
                message: "no active thread to regenerate into".to_string(),
            })
            .await;
            return Ok(());
        };
        self.set_typing(true).await;
        self.set_suggestions(false).await;
        self.schedule_reply(thread_id, text, self.config.regenerate());
        Ok(())
    }

    /// Schedule the provider call behind a sampled delay. The timer task
    /// is tracked so teardown can abort it; the reply is bound to the
    /// thread the turn was submitted to, not whichever thread is active
    /// when it fires.
    fn schedule_reply(&mut self, thread_id: ThreadId, prompt: String, profile: LatencyProfile) {
        self.phase = TurnPhase::AwaitingResponse;
        self.turn_counter += 1;
        let turn = self.turn_counter;
        let delay = profile.sample();
        tracing::debug!(turn, ?delay, "scheduling simulated reply");

        let provider = Arc::clone(&self.provider);
        let cmd_tx = self.cmd_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = provider.generate(&prompt).await;
            // the session may have gone away while the timer slept
            if let Some(tx) = cmd_tx.upgrade() {
                let _ = tx.send(Command::Deliver { turn, result }).await;
            }
        });
        self.pending = Some(PendingTurn {
            turn,
            thread_id,
            handle,
        });
    }

    async fn handle_deliver(&mut self, turn: u64, result: Result<Reply>) -> Result<()> {
        let pending = match self.pending.take() {
            Some(p) if p.turn == turn => p,
            other => {
                // a delivery that raced with cancellation
                self.pending = other;
                tracing::warn!(turn, "ignoring stale reply delivery");
                return Ok(());
            }
        };

        self.phase = TurnPhase::Delivered;
        match result {
            Ok(reply) => {
                if self.store.get_thread(pending.thread_id).await?.is_some() {
                    let message = Message::assistant(reply.text, reply.tone);
                    self.store
                        .append_message(pending.thread_id, message.clone())
                        .await?;
                    self.tone = reply.tone;
                    self.emit(SessionEvent::ReplyDelivered {
                        thread_id: pending.thread_id,
                        message,
                    })
                    .await;
                } else {
                    tracing::debug!(thread_id = %pending.thread_id, "dropping reply for deleted thread");
                }
            }
            Err(e) => {
                self.emit(SessionEvent::Error {
                    message: e.to_string(),
                })
                .await;
            }
        }

        self.set_typing(false).await;
        self.set_suggestions(true).await;
        self.phase = TurnPhase::Idle;
        self.start_next_queued().await
    }

    async fn start_next_queued(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Ok(());
        }
        match self.queued.pop_front() {
            Some(Work::Submit(draft)) => self.start_submit(draft).await,
            Some(Work::Regenerate { text }) => self.start_regenerate(text).await,
            None => Ok(()),
        }
    }

    async fn handle_new_thread(&mut self) -> Result<()> {
        let thread = self.store.create_thread().await?;
        self.set_topic_state(Topic::General).await;
        self.emit(SessionEvent::ThreadCreated { thread }).await;
        Ok(())
    }

    async fn handle_select(&mut self, id: ThreadId) -> Result<()> {
        if let Err(e) = self.store.set_active(id).await {
            self.emit(SessionEvent::Error {
                message: e.to_string(),
            })
            .await;
            return Ok(());
        }
        if let Some(thread) = self.store.get_thread(id).await? {
            self.set_topic_state(thread.topic).await;
        }
        let messages = self.store.messages(id).await?;
        self.emit(SessionEvent::ThreadSelected {
            thread_id: id,
            messages,
        })
        .await;
        Ok(())
    }

    async fn handle_delete(&mut self, id: ThreadId) -> Result<()> {
        // cancel an in-flight turn targeting the deleted thread
        if self.pending.as_ref().is_some_and(|p| p.thread_id == id) {
            self.abort_pending();
            self.phase = TurnPhase::Idle;
            self.set_typing(false).await;
            self.set_suggestions(true).await;
        }

        match self.store.delete_thread(id).await {
            Ok(active) => {
                tracing::info!(thread_id = %id, "thread deleted");
                self.emit(SessionEvent::ThreadDeleted {
                    thread_id: id,
                    active,
                })
                .await;
                if let Some(active_id) = active {
                    if let Some(thread) = self.store.get_thread(active_id).await? {
                        self.set_topic_state(thread.topic).await;
                    }
                }
            }
            Err(e) => {
                self.emit(SessionEvent::Error {
                    message: e.to_string(),
                })
                .await;
            }
        }
        self.start_next_queued().await
    }

    async fn handle_snapshot(&mut self, reply_to: oneshot::Sender<SessionSnapshot>) -> Result<()> {
        let threads = self.store.list_threads().await?;
        let active_thread = self.store.active_thread().await?;
        let messages = match active_thread {
            Some(id) => self.store.messages(id).await?,
            None => Vec::new(),
        };
        let snapshot = SessionSnapshot {
            phase: self.phase,
            typing: self.typing,
            topic: self.topic,
            tone: self.tone,
            suggestions_visible: self.suggestions_visible,
            active_thread,
            threads,
            messages,
            queued_turns: self.queued.len(),
        };
        let _ = reply_to.send(snapshot);
        Ok(())
    }

    async fn ensure_active_thread(&mut self) -> Result<ThreadId> {
        if let Some(id) = self.store.active_thread().await? {
            return Ok(id);
        }
        let thread = self.store.create_thread().await?;
        let id = thread.id;
        self.emit(SessionEvent::ThreadCreated { thread }).await;
        Ok(id)
    }

    async fn set_typing(&mut self, typing: bool) {
        if self.typing != typing {
            self.typing = typing;
            let event = if typing {
                SessionEvent::TypingStarted
            } else {
                SessionEvent::TypingStopped
            };
            self.emit(event).await;
        }
    }

    async fn set_suggestions(&mut self, visible: bool) {
        if self.suggestions_visible != visible {
            self.suggestions_visible = visible;
            self.emit(SessionEvent::SuggestionsVisible { visible }).await;
        }
    }

    async fn set_topic_state(&mut self, topic: Topic) {
        if self.topic != topic {
            self.topic = topic;
            self.emit(SessionEvent::TopicChanged { topic }).await;
        }
    }

    fn abort_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(turn = pending.turn, "aborting pending reply");
            pending.handle.abort();
        }
    }

    async fn emit(&self, event: SessionEvent) {
        if self.events.send(event).await.is_err() {
            tracing::debug!("event receiver dropped");
        }
    }

    async fn emit_error(&self, error: anyhow::Error) {
        tracing::error!(%error, "session command failed");
        self.emit(SessionEvent::Error {
            message: error.to_string(),
        })
        .await;
    }
}
