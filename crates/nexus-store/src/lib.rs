//! Conversation storage for the Nexus engine.
//!
//! `ConversationStore` is the seam between the chat session and its
//! backing state. The only implementation is [`MemoryStore`]: everything
//! is process-local and lost on restart, which is the whole point of a
//! simulated product. The trait exists so a persistent backend can be
//! slotted in without touching the session.

pub mod error;
pub mod memory;
pub mod query;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use query::{ThreadQuery, ThreadSort};
pub use store::ConversationStore;
