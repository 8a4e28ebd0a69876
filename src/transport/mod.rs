//! HTTP transport seam
//!
//! Resource clients never talk to the network directly. They hand a
//! [`TransportRequest`] to an injected [`Transport`] and await its reply,
//! which keeps the accessor testable with a substituted transport.

pub mod http;

// Re-export the production transport
pub use http::HttpTransport;

use crate::error::Result;
use crate::types::{ClientConfig, HttpMethod, QueryParams, ResourceResponse};
use async_trait::async_trait;

/// One HTTP request issued on behalf of a resource client
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub path: String,
    pub params: QueryParams,
    pub body: Option<serde_json::Value>,
}

impl TransportRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: None,
        }
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Core trait for HTTP transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single request and await the backend reply
    async fn dispatch(&self, request: TransportRequest) -> Result<ResourceResponse>;

    /// Get transport name
    fn name(&self) -> &'static str;

    /// Check if the transport is configured and ready
    fn is_ready(&self) -> bool;
}

/// Create the production HTTP transport from configuration
pub fn create_transport(config: &ClientConfig) -> Result<Box<dyn Transport>> {
    Ok(Box::new(http::HttpTransport::new(config)?))
}
