//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::QueryResolver;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<QueryResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<QueryResolver>) -> Self {
        Self { resolver }
    }
}
