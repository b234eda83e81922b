use serde::{Deserialize, Serialize};

/// Environment variables checked, in order, for the generative-text API key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Runtime configuration. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Model identifier sent with every insight request
    pub model: String,

    /// Sampling temperature for insight requests
    pub temperature: f32,

    /// Base URL of the generative-text API (no trailing slash)
    pub api_base_url: String,

    /// API key for the generative-text service. `None` means every insight
    /// request resolves to the failure fallback.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Quiet period before an insight request fires, in milliseconds
    pub insight_debounce_ms: u64,

    /// Length of one counter animation, in milliseconds
    pub counter_duration_ms: u64,

    /// Interval between counter animation frames, in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            insight_debounce_ms: 1500,
            counter_duration_ms: 800,
            frame_interval_ms: 16,
        }
    }
}

impl Settings {
    /// Defaults, with the API key taken from the environment if present.
    pub fn from_env() -> Self {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn insight_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.insight_debounce_ms)
    }

    pub fn counter_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.counter_duration_ms)
    }

    pub fn frame_interval(&self) -> std::time::Duration {
        // A zero interval would make tokio's `interval` panic.
        std::time::Duration::from_millis(self.frame_interval_ms.max(1))
    }
}
