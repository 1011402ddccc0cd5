//! API request and response types

mod error;
mod json;
mod messages;

pub use error::{ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::{Json, JsonRejection};
pub use messages::{MessageRequest, MessagesResponse};
