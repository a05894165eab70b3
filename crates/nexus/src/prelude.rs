//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use nexus::prelude::*;
//! ```

pub use nexus_engine::{
    CannedResponseProvider, ChatSession, Classifier, DemoKind, DemoRunner, EngineConfig,
    LatencyProfile, ResponseProvider, SessionHandle, VoiceSession,
};
pub use nexus_store::{ConversationStore, MemoryStore, ThreadQuery, ThreadSort};
pub use nexus_types::{Draft, Message, SessionEvent, Thread, ThreadId, Tone, Topic};
