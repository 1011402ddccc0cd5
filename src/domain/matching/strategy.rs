//! Match strategies evaluated in priority order for each incoming message

use std::fmt::Debug;

use super::config::MatchingConfig;
use super::similarity::extract_one;

/// Outcome of running the strategy chain on one message
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The user asked for the repository listing
    Listing,
    /// The message names a repository
    Repository {
        name: String,
        score: f64,
        /// Whether a "found project" acknowledgement precedes the synopsis
        acknowledge: bool,
        strategy: &'static str,
    },
    /// Nothing matched well enough
    NoMatch,
}

/// A single way of interpreting a message
pub trait MatchStrategy: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    /// Whether `evaluate` needs the repository names
    fn requires_candidates(&self) -> bool {
        true
    }

    /// Returns `Some` when this strategy accepts the input
    fn evaluate(&self, input: &str, candidates: &[String]) -> Option<Resolution>;
}

/// "list ..." or anything mentioning "project"
#[derive(Debug, Clone, Default)]
pub struct ListingIntentStrategy;

impl MatchStrategy for ListingIntentStrategy {
    fn name(&self) -> &'static str {
        "listing-intent"
    }

    fn requires_candidates(&self) -> bool {
        false
    }

    fn evaluate(&self, input: &str, _candidates: &[String]) -> Option<Resolution> {
        let lowered = input.to_lowercase();

        if lowered.starts_with("list") || lowered.contains("project") {
            Some(Resolution::Listing)
        } else {
            None
        }
    }
}

/// The whole message is scored against the repository names
#[derive(Debug, Clone)]
pub struct BareMentionStrategy {
    threshold: f64,
}

impl BareMentionStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl MatchStrategy for BareMentionStrategy {
    fn name(&self) -> &'static str {
        "bare-mention"
    }

    fn evaluate(&self, input: &str, candidates: &[String]) -> Option<Resolution> {
        let best = extract_one(input, candidates)?;

        tracing::debug!(
            strategy = self.name(),
            candidate = %best.candidate,
            score = best.score,
            "Best bare-mention candidate"
        );

        best.meets(self.threshold).then(|| Resolution::Repository {
            name: best.candidate,
            score: best.score,
            acknowledge: true,
            strategy: self.name(),
        })
    }
}

/// "<verb> <name>", where only the words after the verb are scored
#[derive(Debug, Clone)]
pub struct PrefixedMentionStrategy {
    threshold: f64,
    verbs: Vec<String>,
}

impl PrefixedMentionStrategy {
    pub fn new(threshold: f64, verbs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            threshold,
            verbs: verbs.into_iter().map(|v| v.into().to_lowercase()).collect(),
        }
    }

    fn strip_verb(&self, input: &str) -> Option<String> {
        let words: Vec<&str> = input.split_whitespace().collect();

        if words.len() < 2 {
            return None;
        }

        let verb = words[0].to_lowercase();

        if !self.verbs.iter().any(|v| *v == verb) {
            return None;
        }

        Some(words[1..].join(" "))
    }
}

impl MatchStrategy for PrefixedMentionStrategy {
    fn name(&self) -> &'static str {
        "prefixed-mention"
    }

    fn evaluate(&self, input: &str, candidates: &[String]) -> Option<Resolution> {
        let remainder = self.strip_verb(input)?;
        let best = extract_one(&remainder, candidates)?;

        tracing::debug!(
            strategy = self.name(),
            candidate = %best.candidate,
            score = best.score,
            "Best prefixed-mention candidate"
        );

        best.meets(self.threshold).then(|| Resolution::Repository {
            name: best.candidate,
            score: best.score,
            acknowledge: false,
            strategy: self.name(),
        })
    }
}

/// Builds the strategies in the order they are tried
pub fn default_strategies(config: &MatchingConfig) -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(ListingIntentStrategy),
        Box::new(BareMentionStrategy::new(config.bare_threshold)),
        Box::new(PrefixedMentionStrategy::new(
            config.prefixed_threshold,
            config.intent_verbs.clone(),
        )),
    ]
}
