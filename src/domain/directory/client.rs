use async_trait::async_trait;
use std::fmt::Debug;

use super::RepositorySet;
use crate::domain::DomainError;

/// Lists the repositories of the configured account
#[async_trait]
pub trait RepositoryDirectory: Send + Sync + Debug {
    /// Fetch the current repository listing, most popular first.
    ///
    /// Returns `DomainError::DirectoryUnavailable` when the upstream call
    /// does not succeed.
    async fn list_repositories(&self) -> Result<RepositorySet, DomainError>;
}
