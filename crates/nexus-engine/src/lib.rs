//! The Nexus conversation simulation engine.
//!
//! Accepts user-submitted messages, classifies them by keyword, and
//! commits a canned assistant reply after an artificial delay, while
//! maintaining conversation threads and ephemeral session state (typing
//! indicator, topic label, tone label). There is no real inference
//! anywhere: the provider seam makes the canned implementation
//! swappable for a real backend without touching call sites.

pub mod classify;
pub mod config;
pub mod demo;
pub mod latency;
pub mod provider;
pub mod routes;
pub mod session;
pub mod suggestions;
pub mod voice;

pub use classify::Classifier;
pub use config::EngineConfig;
pub use demo::{DemoKind, DemoMetrics, DemoResponse, DemoRunner};
pub use latency::LatencyProfile;
pub use provider::{CannedResponseProvider, Reply, ResponseProvider};
pub use routes::{resolve, Page};
pub use session::{ChatSession, SessionHandle, SessionSnapshot, TurnPhase};
pub use suggestions::{suggestions_for, Suggestion};
pub use voice::{Transcript, VoiceCapture, VoiceSession};
