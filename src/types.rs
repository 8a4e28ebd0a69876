//! Core types and structures for registration-client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP verb issued by a resource operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

/// Query parameters appended to a resource request
pub type QueryParams = HashMap<String, String>;

/// Reply produced by the transport for one resource operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub data: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl ResourceResponse {
    /// Whether the backend replied with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub connection_pool_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("registration-client/{}", env!("CARGO_PKG_VERSION")),
            connection_pool_size: 10,
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("REGISTER_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(secs) = std::env::var("REGISTER_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.timeout = Duration::from_secs(secs);
            }
        }
        config
    }
}

/// Account registration payload accepted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub login: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "langKey", skip_serializing_if = "Option::is_none")]
    pub lang_key: Option<String>,
}

/// Account record returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReply {
    pub id: i64,
    pub login: String,
    pub email: String,
    #[serde(default)]
    pub activated: bool,
}
