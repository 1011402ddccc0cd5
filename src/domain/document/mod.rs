//! Descriptive document (README) retrieval

use async_trait::async_trait;
use std::fmt::Debug;

/// Fetches the descriptive document of a repository
#[async_trait]
pub trait DocumentSource: Send + Sync + Debug {
    /// Returns the document text, or `None` when no location yielded a
    /// non-empty document. Absence is a normal outcome, not an error.
    async fn fetch_document(&self, repo_name: &str) -> Option<String>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug, Default)]
    pub struct MockDocumentSource {
        documents: HashMap<String, String>,
        delay: Option<Duration>,
        call_count: AtomicUsize,
    }

    impl MockDocumentSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_document(mut self, repo: impl Into<String>, text: impl Into<String>) -> Self {
            self.documents.insert(repo.into(), text.into());
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSource for MockDocumentSource {
        async fn fetch_document(&self, repo_name: &str) -> Option<String> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            self.documents.get(repo_name).cloned()
        }
    }
}

#[cfg(test)]
pub use mock::MockDocumentSource;
