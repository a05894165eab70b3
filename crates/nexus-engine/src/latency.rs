use rand::Rng;
use std::time::Duration;

/// Simulated processing delay: a fixed base plus uniform random jitter.
///
/// Models an asynchronous backend request without any actual I/O. The
/// presets mirror the delays of the product's individual screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub base: Duration,
    pub jitter: Duration,
}

impl LatencyProfile {
    pub const fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub const fn fixed(base: Duration) -> Self {
        Self::new(base, Duration::ZERO)
    }

    /// Chat reply: 2s base, up to 2s jitter.
    pub const fn chat_reply() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(2))
    }

    /// Regenerating an existing reply: flat 1.5s.
    pub const fn regenerate() -> Self {
        Self::fixed(Duration::from_millis(1500))
    }

    /// Capability showcase demo: 2s base, up to 1s jitter.
    pub const fn capability_demo() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(1))
    }

    /// Simulated speech recognition: flat 2s until the transcript is "ready".
    pub const fn voice_transcript() -> Self {
        Self::fixed(Duration::from_secs(2))
    }

    /// Draw a concrete delay in `[base, base + jitter]`.
    pub fn sample(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let jitter_ms = rand::rng().random_range(0..=self.jitter.as_millis() as u64);
        self.base + Duration::from_millis(jitter_ms)
    }
}
