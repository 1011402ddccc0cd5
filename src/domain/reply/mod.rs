//! Outbound replies and the transport seam

mod message;
mod sink;

pub use message::{LinkButton, MessageFormat, OutboundMessage};
pub use sink::{CollectingSink, ReplySink};

#[cfg(test)]
pub use sink::mock::FailingSink;
