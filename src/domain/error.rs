use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    #[error("HTTP error: {message}")]
    Http { message: String },

    #[error("Failed to send reply: {message}")]
    TransportSend { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn directory_unavailable(message: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn transport_send(message: impl Into<String>) -> Self {
        Self::TransportSend {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_directory_unavailable(&self) -> bool {
        matches!(self, Self::DirectoryUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_unavailable_error() {
        let error = DomainError::directory_unavailable("HTTP 503");
        assert_eq!(
            error.to_string(),
            "Repository directory unavailable: HTTP 503"
        );
        assert!(error.is_directory_unavailable());
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("github.account is required");
        assert_eq!(
            error.to_string(),
            "Configuration error: github.account is required"
        );
        assert!(!error.is_directory_unavailable());
    }

    #[test]
    fn test_transport_send_error() {
        let error = DomainError::transport_send("connection reset");
        assert_eq!(error.to_string(), "Failed to send reply: connection reset");
    }
}
