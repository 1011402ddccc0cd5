//! Resolves chat messages to repositories and replies with their synopsis

use std::sync::Arc;

use super::SummaryCache;
use crate::domain::matching::default_strategies;
use crate::domain::{
    CollectingSink, LinkButton, MatchStrategy, MatchingConfig, OutboundMessage, ReplySink,
    RepositoryDirectory, Resolution,
};

const GREETING: &str = "👋 Hi! I can summarize projects from my GitHub.\n\n\
Try:\n- 'Summarize retail-sales'\n- 'Tell me about sales-dashboard'\n- '/projects' to list repos";
const NO_MATCH: &str = "I couldn't find a clear project match. Try the repo name or /projects.";
const LISTING_HEADER: &str = "Here are some repos:";
const LISTING_EMPTY: &str = "No repos found.";
const LISTING_FAILED: &str = "Failed to fetch repos.";

/// Orchestrates matching, summarization and replies for one account
#[derive(Debug)]
pub struct QueryResolver {
    directory: Arc<dyn RepositoryDirectory>,
    summaries: Arc<SummaryCache>,
    strategies: Vec<Box<dyn MatchStrategy>>,
    listing_limit: usize,
}

impl QueryResolver {
    pub fn new(
        directory: Arc<dyn RepositoryDirectory>,
        summaries: Arc<SummaryCache>,
        config: &MatchingConfig,
    ) -> Self {
        Self {
            directory,
            summaries,
            strategies: default_strategies(config),
            listing_limit: config.listing_limit,
        }
    }

    /// Replace the strategy chain; strategies are tried in the given order
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn summaries(&self) -> &SummaryCache {
        &self.summaries
    }

    /// Run the strategy chain. `None` means the message was blank.
    pub async fn resolve(&self, text: &str) -> Option<Resolution> {
        let text = text.trim();

        if text.is_empty() {
            return None;
        }

        let mut candidates: Option<Vec<String>> = None;

        for strategy in &self.strategies {
            if strategy.requires_candidates() && candidates.is_none() {
                candidates = Some(self.candidate_names().await);
            }

            let names = match &candidates {
                Some(names) if strategy.requires_candidates() => names.as_slice(),
                _ => &[],
            };

            if let Some(resolution) = strategy.evaluate(text, names) {
                tracing::info!(strategy = strategy.name(), resolution = ?resolution, "Resolved message");
                return Some(resolution);
            }
        }

        tracing::info!(text = %text, "No strategy matched");
        Some(Resolution::NoMatch)
    }

    /// Handle one incoming text message, sending every reply to `sink`
    pub async fn handle_user_text(&self, text: &str, sink: &dyn ReplySink) {
        let Some(resolution) = self.resolve(text).await else {
            return;
        };

        match resolution {
            Resolution::Listing => self.list_projects(sink).await,
            Resolution::Repository {
                name, acknowledge, ..
            } => {
                if acknowledge {
                    let ack = format!("🔎 Found project: *{}*\nSummarizing...", name);
                    deliver(sink, OutboundMessage::markdown(ack)).await;
                }

                let synopsis = self.summaries.get_summary(&name).await;
                let reply = OutboundMessage::markdown(format!("*{}*\n\n{}", name, synopsis))
                    .without_link_preview();
                deliver(sink, reply).await;
            }
            Resolution::NoMatch => deliver(sink, OutboundMessage::plain(NO_MATCH)).await,
        }
    }

    /// Send the most popular repositories as link buttons
    pub async fn list_projects(&self, sink: &dyn ReplySink) {
        let reply = match self.directory.list_repositories().await {
            Ok(repositories) if repositories.is_empty() => OutboundMessage::plain(LISTING_EMPTY),
            Ok(repositories) => {
                let links = repositories
                    .top(self.listing_limit)
                    .iter()
                    .map(|repo| LinkButton::new(repo.name.clone(), repo.url.clone()))
                    .collect();
                OutboundMessage::plain(LISTING_HEADER).with_links(links)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to list repositories");
                OutboundMessage::plain(LISTING_FAILED)
            }
        };

        deliver(sink, reply).await;
    }

    pub async fn greet(&self, sink: &dyn ReplySink) {
        deliver(sink, OutboundMessage::plain(GREETING)).await;
    }

    /// Handle a message and return the replies instead of sending them
    pub async fn collect_replies(&self, text: &str) -> Vec<OutboundMessage> {
        let sink = CollectingSink::new();
        self.handle_user_text(text, &sink).await;
        sink.into_messages()
    }

    async fn candidate_names(&self) -> Vec<String> {
        match self.directory.list_repositories().await {
            Ok(repositories) => repositories.names(),
            Err(e) => {
                let names = self.summaries.cached_names().await;
                tracing::warn!(
                    error = %e,
                    cached = names.len(),
                    "Directory unavailable, matching against cached repositories"
                );
                names
            }
        }
    }
}

async fn deliver(sink: &dyn ReplySink, message: OutboundMessage) {
    if let Err(e) = sink.send(message).await {
        tracing::warn!(error = %e, "Failed to deliver reply");
    }
}
