use serde::Deserialize;

/// Thresholds and vocabulary used by the match strategies
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum score when the whole message is a repository name
    pub bare_threshold: f64,
    /// Minimum score for "<verb> <name>" messages
    pub prefixed_threshold: f64,
    /// Verbs that introduce a repository name
    pub intent_verbs: Vec<String>,
    /// Maximum repositories shown by the listing flow
    pub listing_limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            bare_threshold: 55.0,
            prefixed_threshold: 50.0,
            intent_verbs: ["summarize", "describe", "about", "tell"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            listing_limit: 12,
        }
    }
}
