use crate::latency::LatencyProfile;
use nexus_types::Draft;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// The transcript every capture "recognizes". No audio is read anywhere;
/// speech recognition is simulated end to end.
const MOCK_TRANSCRIPT: &str = "Hello, I would like to know more about...";
const MOCK_CONFIDENCE: f32 = 0.95;

/// A fabricated speech-recognition result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub confidence: f32,
}

impl Transcript {
    /// Hand the transcript to the chat session as a submittable draft.
    pub fn into_draft(self) -> Draft {
        Draft::text(self.text)
    }
}

/// Simulated voice dictation.
///
/// Starting a capture schedules a fabricated transcript after the voice
/// latency elapses; the capture can be awaited or cancelled.
#[derive(Debug, Clone, Copy)]
pub struct VoiceSession {
    profile: LatencyProfile,
}

impl VoiceSession {
    pub fn new(profile: LatencyProfile) -> Self {
        Self { profile }
    }

    pub fn start(&self) -> VoiceCapture {
        let (tx, rx) = oneshot::channel();
        let delay = self.profile.sample();
        tracing::debug!(?delay, "listening (simulated)");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Transcript {
                text: MOCK_TRANSCRIPT.to_string(),
                confidence: MOCK_CONFIDENCE,
            });
        });
        VoiceCapture { rx, handle }
    }
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self::new(LatencyProfile::voice_transcript())
    }
}

/// An in-flight capture: await the transcript or cancel.
pub struct VoiceCapture {
    rx: oneshot::Receiver<Transcript>,
    handle: JoinHandle<()>,
}

impl VoiceCapture {
    /// Wait for the fabricated transcript. Returns `None` if the capture
    /// was cancelled.
    pub async fn transcript(self) -> Option<Transcript> {
        self.rx.await.ok()
    }

    /// Stop listening; the pending transcript never arrives.
    pub fn cancel(self) {
        self.handle.abort();
    }
}
