//! Hugging Face inference API summarizer

mod summarizer;

pub use summarizer::{GenerationBounds, HuggingFaceSummarizer};
