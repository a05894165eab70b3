//! # Nexus
//!
//! The conversation-simulation core of the AI Nexus demo product:
//! threads, keyword classification, canned replies and simulated
//! latency, with nothing real behind any of it.
//!
//! ## Overview
//!
//! - **Submit and reply**: user messages are classified by keyword and
//!   answered with a canned template after an artificial delay
//! - **Threads**: independent conversations with per-thread history
//! - **Events**: every state change streams out as a tagged event
//! - **Swappable provider**: the canned generator sits behind a trait so
//!   a real backend can be substituted without touching call sites
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nexus::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (session, mut events) = ChatSession::spawn(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(CannedResponseProvider::new()),
//!         EngineConfig::default(),
//!     );
//!
//!     session.submit(Draft::text("Can you help with this code?")).await?;
//!
//!     while let Some(event) = events.recv().await {
//!         match event {
//!             SessionEvent::ReplyDelivered { message, .. } => {
//!                 println!("{}", message.text);
//!                 break;
//!             }
//!             _ => {}
//!         }
//!     }
//!
//!     session.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Nexus is organized into focused crates:
//!
//! - **`nexus-types`**: domain types and the session event model
//! - **`nexus-store`**: conversation store seam + in-memory backend
//! - **`nexus-engine`**: classifier, provider, latency and the session actor

pub mod prelude;

pub use nexus_engine::{
    resolve, suggestions_for, CannedResponseProvider, ChatSession, Classifier, DemoKind,
    DemoMetrics, DemoResponse, DemoRunner, EngineConfig, LatencyProfile, Page, Reply,
    ResponseProvider, SessionHandle, SessionSnapshot, Suggestion, Transcript, TurnPhase,
    VoiceCapture, VoiceSession,
};

pub use nexus_store::{ConversationStore, MemoryStore, StoreError, ThreadQuery, ThreadSort};

pub use nexus_types::{
    Attachment, Author, Draft, Message, MessageId, SessionEvent, Thread, ThreadId, Tone, Topic,
};
