use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse conversation category assigned by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CodeDevelopment,
    BusinessStrategy,
    CreativeWriting,
    DataAnalysis,
    General,
}

impl Topic {
    /// Human-readable label shown in thread headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CodeDevelopment => "Code Development",
            Self::BusinessStrategy => "Business Strategy",
            Self::CreativeWriting => "Creative Writing",
            Self::DataAnalysis => "Data Analysis",
            Self::General => "General Conversation",
        }
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
