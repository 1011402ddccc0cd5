//! Memoized repository synopses

use std::sync::Arc;

use moka::future::Cache;

use crate::domain::summary::placeholder;
use crate::domain::{DocumentSource, Summarizer};

/// Process-wide synopsis cache keyed by repository name
///
/// Entries never expire. Concurrent misses for the same name share a single
/// retrieval and summarization; later callers wait for the in-flight result.
#[derive(Debug)]
pub struct SummaryCache {
    cache: Cache<String, String>,
    documents: Arc<dyn DocumentSource>,
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryCache {
    pub fn new(documents: Arc<dyn DocumentSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            cache: Cache::builder().build(),
            documents,
            summarizer,
        }
    }

    /// Synopsis for `repo_name`, computing and storing it on first use
    pub async fn get_summary(&self, repo_name: &str) -> String {
        if let Some(cached) = self.cache.get(repo_name).await {
            tracing::debug!(repo = %repo_name, "Cache hit for synopsis");
            return cached;
        }

        self.cache
            .get_with(repo_name.to_string(), self.compute(repo_name))
            .await
    }

    async fn compute(&self, repo_name: &str) -> String {
        tracing::debug!(repo = %repo_name, "Cache miss, summarizing README");

        match self.documents.fetch_document(repo_name).await {
            Some(document) => {
                let synopsis = self.summarizer.summarize(&document).await;
                tracing::info!(
                    repo = %repo_name,
                    summarizer = self.summarizer.summarizer_name(),
                    "Summarized README"
                );
                synopsis
            }
            None => placeholder::README_NOT_FOUND.to_string(),
        }
    }

    /// Names with a stored synopsis, sorted
    pub async fn cached_names(&self) -> Vec<String> {
        self.cache.run_pending_tasks().await;

        let mut names: Vec<String> = self
            .cache
            .iter()
            .map(|(name, _)| name.as_ref().clone())
            .collect();
        names.sort();
        names
    }

    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
