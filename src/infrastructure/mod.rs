//! Infrastructure layer - External service implementations

pub mod github;
pub mod http_client;
pub mod huggingface;
pub mod logging;
pub mod services;
