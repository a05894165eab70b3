use nexus_types::Topic;
use serde::Serialize;

/// A canned follow-up prompt offered beneath the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub category: &'static str,
}

const fn suggestion(text: &'static str, category: &'static str) -> Suggestion {
    Suggestion { text, category }
}

const BASE: &[Suggestion] = &[
    suggestion("Can you explain this in simpler terms?", "clarification"),
    suggestion("What are some practical examples?", "examples"),
    suggestion("How can I implement this?", "implementation"),
    suggestion("What are the potential challenges?", "analysis"),
    suggestion("Can you provide more details?", "details"),
    suggestion("What would be the next steps?", "next-steps"),
];

const CODE_EXTRAS: &[Suggestion] = &[
    suggestion("Can you optimize this code?", "optimization"),
    suggestion("Add error handling", "error-handling"),
];

const BUSINESS_EXTRAS: &[Suggestion] = &[
    suggestion("What are the market implications?", "market-analysis"),
    suggestion("Create a SWOT analysis", "analysis"),
];

/// Contextual suggestions for the current topic, capped at `cap`.
///
/// Topic-specific entries come first so the cap never truncates them
/// away in favor of generic ones.
pub fn suggestions_for(topic: Topic, cap: usize) -> Vec<Suggestion> {
    let extras = match topic {
        Topic::CodeDevelopment => CODE_EXTRAS,
        Topic::BusinessStrategy => BUSINESS_EXTRAS,
        _ => &[],
    };
    let mut out = Vec::with_capacity(extras.len() + BASE.len());
    out.extend_from_slice(extras);
    out.extend_from_slice(BASE);
    out.truncate(cap);
    out
}
