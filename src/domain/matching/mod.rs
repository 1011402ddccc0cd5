//! Fuzzy matching of free text against repository names

mod config;
pub mod similarity;
mod strategy;

pub use config::MatchingConfig;
pub use similarity::{extract_one, weighted_ratio, MatchResult};
pub use strategy::{
    default_strategies, BareMentionStrategy, ListingIntentStrategy, MatchStrategy,
    PrefixedMentionStrategy, Resolution,
};
