//! Chat message endpoints

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{Json, MessageRequest, MessagesResponse};
use crate::domain::CollectingSink;

/// POST /v1/messages
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Json<MessagesResponse> {
    debug!(chars = request.text.chars().count(), "Handling message");

    let messages = state.resolver.collect_replies(&request.text).await;

    Json(MessagesResponse::new(messages))
}

/// GET /v1/projects
pub async fn list_projects(State(state): State<AppState>) -> Json<MessagesResponse> {
    let sink = CollectingSink::new();
    state.resolver.list_projects(&sink).await;

    Json(MessagesResponse::new(sink.into_messages()))
}

/// GET /v1/start
pub async fn start(State(state): State<AppState>) -> Json<MessagesResponse> {
    let sink = CollectingSink::new();
    state.resolver.greet(&sink).await;

    Json(MessagesResponse::new(sink.into_messages()))
}
