//! PMP Repo Digest
//!
//! Resolves free-text chat messages to one of an account's GitHub
//! repositories and replies with a synopsis of its README:
//! - Repository listing ranked by stars
//! - Fuzzy matching of bare and verb-prefixed mentions
//! - README retrieval with branch and API fallbacks
//! - Summaries from a hosted inference model, memoized per repository

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::{
    github::{GithubDirectoryClient, GithubEndpoint, GithubReadmeRetriever},
    http_client::HttpClient,
    huggingface::HuggingFaceSummarizer,
    services::{QueryResolver, SummaryCache},
};
use tracing::info;

/// Wire the pipeline from configuration
pub fn create_resolver(config: &AppConfig) -> anyhow::Result<Arc<QueryResolver>> {
    let endpoint = GithubEndpoint::from_config(&config.github);
    let github_timeout = Duration::from_secs(config.github.timeout_secs);
    let summarizer_timeout = Duration::from_secs(config.summarizer.timeout_secs);

    let directory = GithubDirectoryClient::new(
        HttpClient::with_timeout(github_timeout)?,
        endpoint.clone(),
    );
    let documents = GithubReadmeRetriever::new(
        HttpClient::with_timeout(github_timeout)?,
        endpoint.clone(),
    );
    let summarizer = HuggingFaceSummarizer::from_config(
        HttpClient::with_timeout(summarizer_timeout)?,
        &config.summarizer,
    );

    let summaries = Arc::new(SummaryCache::new(Arc::new(documents), Arc::new(summarizer)));
    let resolver = QueryResolver::new(Arc::new(directory), summaries, &config.resolver);

    info!(
        account = %endpoint.account,
        authenticated = endpoint.is_authenticated(),
        model = %config.summarizer.model,
        "Repository pipeline ready"
    );

    Ok(Arc::new(resolver))
}

/// Create application state for the HTTP surface
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    Ok(AppState::new(create_resolver(config)?))
}
