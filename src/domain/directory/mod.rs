//! Repository directory domain models and traits

mod client;
mod entity;

pub use client::RepositoryDirectory;
pub use entity::{RepositoryRef, RepositorySet};

#[cfg(test)]
pub use client::mock::MockRepositoryDirectory;
