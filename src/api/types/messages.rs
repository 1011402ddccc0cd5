//! Message exchange request/response types

use serde::{Deserialize, Serialize};

use crate::domain::OutboundMessage;

/// A text message received from the chat transport
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Replies to relay back to the user, in send order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<OutboundMessage>,
}

impl MessagesResponse {
    pub fn new(messages: Vec<OutboundMessage>) -> Self {
        Self { messages }
    }
}
