use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Mutex;

use super::OutboundMessage;
use crate::domain::DomainError;

/// Delivers replies to the user through the chat transport
#[async_trait]
pub trait ReplySink: Send + Sync + Debug {
    async fn send(&self, message: OutboundMessage) -> Result<(), DomainError>;
}

/// Sink that keeps every message in memory, in send order
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<OutboundMessage>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_messages(self) -> Vec<OutboundMessage> {
        self.messages
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ReplySink for CollectingSink {
    async fn send(&self, message: OutboundMessage) -> Result<(), DomainError> {
        self.messages
            .lock()
            .map_err(|e| DomainError::transport_send(format!("Sink lock poisoned: {}", e)))?
            .push(message);
        Ok(())
    }
}
