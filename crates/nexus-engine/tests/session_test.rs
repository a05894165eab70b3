use nexus_engine::{CannedResponseProvider, ChatSession, EngineConfig, SessionHandle};
use nexus_store::{ConversationStore, MemoryStore};
use nexus_types::{Draft, SessionEvent, ThreadId, Tone, Topic};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn test_config() -> EngineConfig {
    EngineConfig {
        greeting_enabled: false,
        ..EngineConfig::default()
    }
}

fn spawn_session(config: EngineConfig) -> (SessionHandle, mpsc::Receiver<SessionEvent>) {
    ChatSession::spawn(
        Arc::new(MemoryStore::new()),
        Arc::new(CannedResponseProvider::new()),
        config,
    )
}

async fn next_event(rx: &mut mpsc::Receiver<SessionEvent>) -> SessionEvent {
    tokio::time::timeout(Duration::from_secs(60), rx.recv())
        .await
        .expect("no event within virtual 60s")
        .expect("event channel closed")
}

async fn initial_thread(rx: &mut mpsc::Receiver<SessionEvent>) -> ThreadId {
    match next_event(rx).await {
        SessionEvent::ThreadCreated { thread } => thread.id,
        other => panic!("expected initial thread_created, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn submit_runs_the_full_turn_state_machine() {
    let (session, mut events) = spawn_session(test_config());
    let thread_id = initial_thread(&mut events).await;

    let started = tokio::time::Instant::now();
    session
        .submit(Draft::text("Can you help with this code?"))
        .await
        .unwrap();

    match next_event(&mut events).await {
        SessionEvent::Submitted { thread_id: tid, message } => {
            assert_eq!(tid, thread_id);
            assert_eq!(message.text, "Can you help with this code?");
            assert!(message.is_user());
        }
        other => panic!("expected submitted, got {other:?}"),
    }
    match next_event(&mut events).await {
        SessionEvent::TopicChanged { topic } => assert_eq!(topic, Topic::CodeDevelopment),
        other => panic!("expected topic_changed, got {other:?}"),
    }
    assert!(matches!(
        next_event(&mut events).await,
        SessionEvent::TypingStarted
    ));
    // typing flipped synchronously: no simulated time has passed yet
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(matches!(
        next_event(&mut events).await,
        SessionEvent::SuggestionsVisible { visible: false }
    ));

    match next_event(&mut events).await {
        SessionEvent::ReplyDelivered { message, .. } => {
            assert!(message.text.contains("Structure Analysis"));
            assert_eq!(message.tone, Some(Tone::Analytical));
        }
        other => panic!("expected reply_delivered, got {other:?}"),
    }
    assert!(matches!(
        next_event(&mut events).await,
        SessionEvent::TypingStopped
    ));
    assert!(matches!(
        next_event(&mut events).await,
        SessionEvent::SuggestionsVisible { visible: true }
    ));

    // chat reply delay stays within [base, base + jitter]
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2), "delivered too early: {elapsed:?}");
    assert!(elapsed <= Duration::from_secs(4), "delivered too late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn business_prompts_get_a_professional_reply() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    session
        .submit(Draft::text("What's our business strategy?"))
        .await
        .unwrap();

    let mut topic = None;
    let mut tone = None;
    loop {
        match next_event(&mut events).await {
            SessionEvent::TopicChanged { topic: t } => topic = Some(t),
            SessionEvent::ReplyDelivered { message, .. } => {
                tone = message.tone;
                break;
            }
            _ => {}
        }
    }
    assert_eq!(topic, Some(Topic::BusinessStrategy));
    assert_eq!(tone, Some(Tone::Professional));
}

#[tokio::test(start_paused = true)]
async fn empty_submission_is_a_silent_noop() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    session.submit(Draft::text("   \t  ")).await.unwrap();
    session.submit(Draft::default()).await.unwrap();

    let snapshot = session.snapshot().await.unwrap();
    assert!(snapshot.messages.is_empty());
    assert!(!snapshot.typing);
    assert_eq!(snapshot.threads[0].message_count, 0);
}

#[tokio::test(start_paused = true)]
async fn appended_messages_keep_submission_order() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    for i in 0..3 {
        session
            .submit(Draft::text(format!("question number {i}")))
            .await
            .unwrap();
        // wait for the turn to complete before the next submit
        loop {
            if matches!(next_event(&mut events).await, SessionEvent::TypingStopped) {
                break;
            }
        }
    }

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 6);
    assert_eq!(snapshot.threads[0].message_count, 6);
    for (i, pair) in snapshot.messages.chunks(2).enumerate() {
        assert_eq!(pair[0].text, format!("question number {i}"));
        assert!(pair[0].is_user());
        assert!(!pair[1].is_user());
    }
}

#[tokio::test(start_paused = true)]
async fn double_submit_queues_and_delivers_both() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    session.submit(Draft::text("first question")).await.unwrap();
    session.submit(Draft::text("second question")).await.unwrap();

    let mut queued = false;
    let mut delivered = Vec::new();
    while delivered.len() < 2 {
        match next_event(&mut events).await {
            SessionEvent::TurnQueued { position } => {
                assert_eq!(position, 1);
                queued = true;
            }
            SessionEvent::ReplyDelivered { message, .. } => delivered.push(message),
            _ => {}
        }
    }
    assert!(queued, "second submit should have been queued");

    // capacity-1 queue keeps ordering deterministic
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 4);
    assert_eq!(snapshot.messages[0].text, "first question");
    assert!(!snapshot.messages[1].is_user());
    assert_eq!(snapshot.messages[2].text, "second question");
    assert!(!snapshot.messages[3].is_user());
    assert_eq!(snapshot.queued_turns, 0);
}

#[tokio::test(start_paused = true)]
async fn deleting_the_last_thread_leaves_no_active_thread() {
    let (session, mut events) = spawn_session(test_config());
    let thread_id = initial_thread(&mut events).await;

    session.delete_thread(thread_id).await.unwrap();
    match next_event(&mut events).await {
        SessionEvent::ThreadDeleted { thread_id: tid, active } => {
            assert_eq!(tid, thread_id);
            assert_eq!(active, None);
        }
        other => panic!("expected thread_deleted, got {other:?}"),
    }

    let snapshot = session.snapshot().await.unwrap();
    assert!(snapshot.threads.is_empty());
    assert_eq!(snapshot.active_thread, None);

    // the next submit transparently opens a fresh thread
    session.submit(Draft::text("hello again")).await.unwrap();
    assert!(matches!(
        next_event(&mut events).await,
        SessionEvent::ThreadCreated { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn selecting_a_thread_restores_its_history() {
    let (session, mut events) = spawn_session(test_config());
    let first = initial_thread(&mut events).await;

    session.submit(Draft::text("talk about code")).await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::TypingStopped) {
            break;
        }
    }

    session.new_thread().await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::ThreadCreated { .. }) {
            break;
        }
    }

    session.submit(Draft::text("business plans")).await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::TypingStopped) {
            break;
        }
    }

    session.select_thread(first).await.unwrap();
    loop {
        match next_event(&mut events).await {
            SessionEvent::ThreadSelected { thread_id, messages } => {
                assert_eq!(thread_id, first);
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0].text, "talk about code");
                break;
            }
            _ => {}
        }
    }

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.active_thread, Some(first));
    assert_eq!(snapshot.topic, Topic::CodeDevelopment);
}

#[tokio::test(start_paused = true)]
async fn deleting_a_thread_cancels_its_pending_reply() {
    let (session, mut events) = spawn_session(test_config());
    let thread_id = initial_thread(&mut events).await;

    session.submit(Draft::text("doomed question")).await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::TypingStarted) {
            break;
        }
    }

    session.delete_thread(thread_id).await.unwrap();
    // the cancelled turn stops "typing" before the deletion lands
    let mut saw_typing_stopped = false;
    loop {
        match next_event(&mut events).await {
            SessionEvent::TypingStopped => saw_typing_stopped = true,
            SessionEvent::ThreadDeleted { .. } => break,
            _ => {}
        }
    }
    assert!(saw_typing_stopped);

    // a new turn works normally; the aborted reply never surfaces
    session.submit(Draft::text("fresh start")).await.unwrap();
    loop {
        match next_event(&mut events).await {
            SessionEvent::ReplyDelivered { thread_id: tid, .. } => {
                assert_ne!(tid, thread_id);
                break;
            }
            _ => {}
        }
    }
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn regenerate_appends_an_additional_reply() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    session.submit(Draft::text("explain this code")).await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::TypingStopped) {
            break;
        }
    }

    let started = tokio::time::Instant::now();
    session.regenerate("explain this code").await.unwrap();
    loop {
        match next_event(&mut events).await {
            SessionEvent::ReplyDelivered { message, .. } => {
                assert!(message.text.contains("Structure Analysis"));
                break;
            }
            _ => {}
        }
    }
    // regenerate runs on its flat 1.5s profile
    assert_eq!(started.elapsed(), Duration::from_millis(1500));

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn greeting_is_seeded_when_enabled() {
    let (session, mut events) = spawn_session(EngineConfig::default());
    initial_thread(&mut events).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 1);
    assert!(!snapshot.messages[0].is_user());
    assert_eq!(snapshot.messages[0].tone, Some(Tone::Friendly));
}

#[tokio::test(start_paused = true)]
async fn dropping_every_handle_aborts_the_pending_reply() {
    let store = Arc::new(MemoryStore::new());
    let (session, mut events) = ChatSession::spawn(
        store.clone(),
        Arc::new(CannedResponseProvider::new()),
        test_config(),
    );
    let thread_id = initial_thread(&mut events).await;

    session.submit(Draft::text("abandoned question")).await.unwrap();
    loop {
        if matches!(next_event(&mut events).await, SessionEvent::TypingStarted) {
            break;
        }
    }

    // no shutdown call: the channel closing is the only teardown signal
    drop(session);
    drop(events);

    // well past the reply window
    tokio::time::sleep(Duration::from_secs(10)).await;

    let messages = store.messages(thread_id).await.unwrap();
    assert_eq!(messages.len(), 1, "reply landed after the session was gone");
    assert!(messages[0].is_user());
}

#[tokio::test(start_paused = true)]
async fn shutdown_emits_closed() {
    let (session, mut events) = spawn_session(test_config());
    initial_thread(&mut events).await;

    session.shutdown().await.unwrap();
    assert!(matches!(next_event(&mut events).await, SessionEvent::Closed));
    assert!(session.submit(Draft::text("too late")).await.is_err());
}
