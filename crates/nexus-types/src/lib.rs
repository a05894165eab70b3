//! Core domain types for the Nexus conversation engine.
//!
//! Everything here is plain data: messages, threads, topics, drafts and
//! the event model streamed out of a running chat session. The behavior
//! lives in `nexus-engine` and `nexus-store`.

pub mod events;
pub mod message;
pub mod thread;
pub mod topic;

pub use events::SessionEvent;
pub use message::{Attachment, Author, Draft, Message, MessageId, Tone};
pub use thread::{Thread, ThreadId};
pub use topic::Topic;
