//! v1 API endpoints

pub mod messages;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(messages::post_message))
        .route("/projects", get(messages::list_projects))
        .route("/start", get(messages::start))
}
