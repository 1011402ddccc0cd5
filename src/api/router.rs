use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::directory::MockRepositoryDirectory;
    use crate::domain::document::MockDocumentSource;
    use crate::domain::summary::MockSummarizer;
    use crate::domain::MatchingConfig;
    use crate::infrastructure::services::{QueryResolver, SummaryCache};

    fn app() -> Router {
        let directory = Arc::new(
            MockRepositoryDirectory::new().with_repositories(&["spoon-knife", "hello-world"]),
        );
        let documents = Arc::new(
            MockDocumentSource::new().with_document("spoon-knife", "Fork me on GitHub"),
        );
        let summaries = Arc::new(SummaryCache::new(documents, Arc::new(MockSummarizer::new())));
        let resolver = QueryResolver::new(directory, summaries, &MatchingConfig::default());

        create_router(AppState::new(Arc::new(resolver)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_message(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/messages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_message_returns_replies() {
        let response = app()
            .oneshot(post_message(r#"{"text": "spoon-knife"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[1]["text"],
            "*spoon-knife*\n\nSummary: Fork me on GitHub"
        );
        assert_eq!(messages[1]["format"], "markdown");
    }

    #[tokio::test]
    async fn test_blank_message_has_no_replies() {
        let response = app().oneshot(post_message(r#"{"text": "   "}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["messages"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_as_json() {
        let response = app().oneshot(post_message(r#"{"txt": 1}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_projects_endpoint() {
        let request = Request::builder()
            .uri("/v1/projects")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["messages"][0]["text"], "Here are some repos:");
        assert_eq!(json["messages"][0]["links"][0]["label"], "spoon-knife");
        assert_eq!(json["messages"][0]["links"][1]["label"], "hello-world");
    }

    #[tokio::test]
    async fn test_start_and_health() {
        let start = app()
            .oneshot(Request::builder().uri("/v1/start").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(start.status(), StatusCode::OK);

        let health = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(health).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["cached_summaries"], 0);
    }
}
