use serde::{Deserialize, Serialize};

/// Panel text before the first insight has been produced.
pub const INITIAL_INSIGHT: &str = "Analyzing your patterns...";

/// Shown instead of calling the service when there is nothing to analyze.
pub const EMPTY_LEDGER_INSIGHT: &str = "Add some expenses to see smart insights.";

/// Shown when the service answers with no text.
pub const BLANK_RESPONSE_INSIGHT: &str =
    "Keep observing your flow; awareness is the first step to balance.";

/// Shown when the service call fails for any reason.
pub const FAILURE_INSIGHT: &str =
    "Your financial journey is unique. Stay mindful of your choices today.";

/// Outcome of one insight request. Always resolves to displayable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Insight {
    /// Text produced by the generative service, shown verbatim
    Generated(String),

    /// Canned text, with the reason it was used (kept for diagnostics)
    Fallback { text: String, cause: String },
}

impl Insight {
    pub fn fallback(text: &str, cause: impl Into<String>) -> Self {
        Insight::Fallback {
            text: text.to_string(),
            cause: cause.into(),
        }
    }

    /// The text to put on screen.
    pub fn text(&self) -> &str {
        match self {
            Insight::Generated(text) => text,
            Insight::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Insight::Fallback { .. })
    }
}

/// What the insight panel currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPanel {
    pub text: String,

    /// True while a request is in flight (the panel dims its text)
    pub loading: bool,
}

impl Default for InsightPanel {
    fn default() -> Self {
        Self {
            text: INITIAL_INSIGHT.to_string(),
            loading: false,
        }
    }
}

/// Request handed to an [`InsightProvider`](crate::providers::traits::InsightProvider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier, e.g. `gemini-3-flash-preview`
    pub model: String,

    /// Free-text prompt
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f32,
}
