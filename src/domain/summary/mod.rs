//! Summarization domain models and traits

pub mod placeholder;
mod response;
mod summarizer;

pub use response::SummarizerResponse;
pub use summarizer::Summarizer;

#[cfg(test)]
pub use summarizer::mock::MockSummarizer;
