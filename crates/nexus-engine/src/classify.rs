use nexus_types::Topic;

/// Keyword rules in priority order. First matching rule wins.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::CodeDevelopment, &["code", "programming"]),
    (Topic::BusinessStrategy, &["business", "strategy"]),
    (Topic::CreativeWriting, &["creative", "writing"]),
    (Topic::DataAnalysis, &["data", "analysis"]),
];

/// Case-insensitive substring classifier over a fixed rule set.
///
/// A deliberately crude heuristic, not an NLP pipeline: no tokenization,
/// stemming or scoring. One instance is shared by topic labeling and
/// response template selection so the two can never drift apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Total over all inputs; unmatched text falls back to `General`.
    pub fn classify(&self, text: &str) -> Topic {
        let lower = text.to_lowercase();
        for (topic, keywords) in RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return *topic;
            }
        }
        Topic::General
    }
}
