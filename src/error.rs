//! Error handling for registration-client

use thiserror::Error;

/// Main error type for registration-client
#[derive(Error, Debug, Clone)]
pub enum RegistrationClientError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Backend replied with status {status}")]
    Status {
        status: u16,
        body: Option<String>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },
}

impl RegistrationClientError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a non-2xx status error
    pub fn status(status: u16, body: Option<String>, url: Option<String>) -> Self {
        Self::Status { status, body, url }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Check if this error indicates the account is already registered
    pub fn is_conflict(&self) -> bool {
        matches!(self.status_code(), Some(409))
    }
}

/// Convert from common error types
impl From<reqwest::Error> for RegistrationClientError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::transport("Connection failed", status_code, url)
        } else {
            Self::transport(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for RegistrationClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<tokio::time::error::Elapsed> for RegistrationClientError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::timeout("Operation", 30)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RegistrationClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_extraction() {
        let err = RegistrationClientError::status(409, None, None);
        assert_eq!(err.status_code(), Some(409));

        let err = RegistrationClientError::transport("down", Some(502), None);
        assert_eq!(err.status_code(), Some(502));

        let err = RegistrationClientError::config("missing base URL");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_conflict_detection() {
        assert!(RegistrationClientError::status(409, None, None).is_conflict());
        assert!(!RegistrationClientError::status(400, None, None).is_conflict());
        assert!(!RegistrationClientError::timeout("register", 30).is_conflict());
    }
}
