//! Infrastructure services

mod query_resolver;
mod summary_service;

pub use query_resolver::QueryResolver;
pub use summary_service::SummaryCache;
