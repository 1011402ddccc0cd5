use async_trait::async_trait;
use std::fmt::Debug;

/// Condenses a document into a synopsis
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Always yields text; service faults become placeholder sentences
    async fn summarize(&self, text: &str) -> String;

    /// Get the summarizer name
    fn summarizer_name(&self) -> &'static str;
}
