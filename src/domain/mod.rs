//! Domain layer - Core business logic and entities

pub mod directory;
pub mod document;
pub mod error;
pub mod matching;
pub mod reply;
pub mod summary;

pub use directory::{RepositoryDirectory, RepositoryRef, RepositorySet};
pub use document::DocumentSource;
pub use error::DomainError;
pub use matching::{MatchResult, MatchStrategy, MatchingConfig, Resolution};
pub use reply::{CollectingSink, LinkButton, MessageFormat, OutboundMessage, ReplySink};
pub use summary::{Summarizer, SummarizerResponse};
