use serde::{Deserialize, Serialize};

/// The application's pages. Navigation is client-side only; there is no
/// server routing behind this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    ChatInterface,
    CapabilitiesShowcase,
    ConversationHistoryDashboard,
    Homepage,
    VoiceExperienceCenter,
    PersonalizationHub,
    NotFound,
}

/// Fixed path → page table. The root shows the capabilities showcase.
pub const ROUTES: &[(&str, Page)] = &[
    ("/", Page::CapabilitiesShowcase),
    ("/chat-interface-immersive-ai-experience", Page::ChatInterface),
    ("/ai-capabilities-showcase", Page::CapabilitiesShowcase),
    ("/conversation-history-dashboard", Page::ConversationHistoryDashboard),
    ("/homepage-ai-conversational-platform", Page::Homepage),
    ("/voice-experience-center", Page::VoiceExperienceCenter),
    ("/personalization-hub-ai-avatar-customization", Page::PersonalizationHub),
];

/// Resolve a path against the route table; anything unknown is NotFound.
/// A single trailing slash is tolerated.
pub fn resolve(path: &str) -> Page {
    let normalized = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES
        .iter()
        .find(|(route, _)| *route == normalized)
        .map(|(_, page)| *page)
        .unwrap_or(Page::NotFound)
}
