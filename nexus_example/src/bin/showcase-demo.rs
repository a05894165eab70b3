use anyhow::Result;
use nexus_engine::{resolve, DemoKind, DemoRunner, VoiceSession};
use tracing_subscriber::EnvFilter;

/// Drives the non-chat surfaces: the capability showcase runner, the
/// simulated voice capture and the client-side route table.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Nexus Capability Showcase");
    println!("=========================\n");

    let runner = DemoRunner::default();
    for kind in [DemoKind::Creative, DemoKind::Analytical, DemoKind::Voice] {
        println!("Running {kind:?} demo...");
        let response = runner.run(kind, "improve team onboarding").await;
        println!("{}\n", response.text);
        for (name, score) in response.metrics.scores {
            println!("  {name}: {score}");
        }
        println!("  response time: {}\n", response.metrics.response_time);
    }

    println!("Voice capture (simulated)...");
    let capture = VoiceSession::default().start();
    if let Some(transcript) = capture.transcript().await {
        println!(
            "  transcript: {:?} ({:.0}% confident)\n",
            transcript.text,
            transcript.confidence * 100.0
        );
    }

    println!("Route table:");
    for path in ["/", "/voice-experience-center", "/no-such-page"] {
        println!("  {path} -> {:?}", resolve(path));
    }

    Ok(())
}
