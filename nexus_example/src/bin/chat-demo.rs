use anyhow::Result;
use nexus_engine::{suggestions_for, CannedResponseProvider, ChatSession, EngineConfig};
use nexus_store::MemoryStore;
use nexus_types::{Draft, SessionEvent};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Scripted walk through the chat session: a few submissions, a thread
/// switch and a final snapshot, with every event printed as it streams.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional config file: `chat-demo path/to/engine.toml`
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    println!("Nexus Chat - Scripted Demo");
    println!("==========================\n");

    let (session, mut events) = ChatSession::spawn(
        Arc::new(MemoryStore::new()),
        Arc::new(CannedResponseProvider::new()),
        config,
    );

    let prompts = [
        "Can you help with this code?",
        "What's our business strategy?",
        "Just saying hello!",
    ];
    for prompt in prompts {
        println!("> {prompt}");
        session.submit(Draft::text(prompt)).await?;

        loop {
            let Some(event) = events.recv().await else {
                anyhow::bail!("session ended unexpectedly");
            };
            match event {
                SessionEvent::TypingStarted => println!("  [assistant is typing...]"),
                SessionEvent::TopicChanged { topic } => println!("  [topic: {topic}]"),
                SessionEvent::ReplyDelivered { message, .. } => {
                    let tone = message.tone.map(|t| t.to_string()).unwrap_or_default();
                    println!("\n--- reply ({tone}) ---\n{}\n", message.text);
                }
                SessionEvent::TypingStopped => break,
                _ => {}
            }
        }
    }

    let snapshot = session.snapshot().await?;
    println!("Threads: {}", snapshot.threads.len());
    println!(
        "Messages in active thread: {} (topic: {})",
        snapshot.messages.len(),
        snapshot.topic
    );

    println!("\nSuggested follow-ups:");
    for suggestion in suggestions_for(snapshot.topic, 6) {
        println!("  - {}", suggestion.text);
    }

    session.shutdown().await?;
    Ok(())
}
