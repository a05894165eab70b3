use crate::latency::LatencyProfile;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Engine tuning knobs.
///
/// Defaults match the demo screens' timings; a TOML file can override
/// any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chat reply delay, base milliseconds.
    pub chat_reply_base_ms: u64,
    /// Chat reply delay, uniform jitter ceiling in milliseconds.
    pub chat_reply_jitter_ms: u64,
    /// Flat delay for regenerating a reply.
    pub regenerate_ms: u64,
    /// Capability demo delay, base milliseconds.
    pub demo_base_ms: u64,
    /// Capability demo delay, jitter ceiling in milliseconds.
    pub demo_jitter_ms: u64,
    /// Flat delay before the fabricated voice transcript is ready.
    pub voice_transcript_ms: u64,
    /// Maximum number of smart suggestions surfaced at once.
    pub suggestion_cap: usize,
    /// Seed a friendly greeting message into the initial thread.
    pub greeting_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chat_reply_base_ms: 2000,
            chat_reply_jitter_ms: 2000,
            regenerate_ms: 1500,
            demo_base_ms: 2000,
            demo_jitter_ms: 1000,
            voice_transcript_ms: 2000,
            suggestion_cap: 6,
            greeting_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file (useful for demos and testing).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn chat_reply(&self) -> LatencyProfile {
        LatencyProfile::new(
            Duration::from_millis(self.chat_reply_base_ms),
            Duration::from_millis(self.chat_reply_jitter_ms),
        )
    }

    pub fn regenerate(&self) -> LatencyProfile {
        LatencyProfile::fixed(Duration::from_millis(self.regenerate_ms))
    }

    pub fn capability_demo(&self) -> LatencyProfile {
        LatencyProfile::new(
            Duration::from_millis(self.demo_base_ms),
            Duration::from_millis(self.demo_jitter_ms),
        )
    }

    pub fn voice_transcript(&self) -> LatencyProfile {
        LatencyProfile::fixed(Duration::from_millis(self.voice_transcript_ms))
    }
}
