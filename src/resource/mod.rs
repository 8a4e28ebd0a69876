//! Resource clients bound to backend endpoints
//!
//! A resource client maps a closed set of verb methods onto one backend
//! path. It holds no state beyond its immutable path binding, so clones
//! and concurrent callers share it freely.

pub mod register;
pub mod registry;

// Re-export main functionality
pub use register::{create_register_resource, REGISTER_PATH};
pub use registry::ResourceRegistry;

use crate::error::Result;
use crate::transport::{Transport, TransportRequest};
use crate::types::{HttpMethod, QueryParams, ResourceResponse};
use serde::Serialize;
use std::sync::Arc;

/// A client whose methods each map to one HTTP verb against a fixed base path
#[derive(Clone)]
pub struct ResourceClient {
    path: String,
    default_params: QueryParams,
    transport: Arc<dyn Transport>,
}

impl ResourceClient {
    /// Bind a resource client to a backend path
    pub fn new(
        path: impl Into<String>,
        default_params: QueryParams,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            path: path.into(),
            default_params,
            transport,
        }
    }

    /// The path this client is bound to
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters merged into every request
    pub fn default_params(&self) -> &QueryParams {
        &self.default_params
    }

    /// Fetch the resource (GET)
    pub async fn get(&self, params: &QueryParams) -> Result<ResourceResponse> {
        self.dispatch(HttpMethod::Get, None, params, None).await
    }

    /// List the resource collection (GET)
    pub async fn query(&self, params: &QueryParams) -> Result<ResourceResponse> {
        self.dispatch(HttpMethod::Get, None, params, None).await
    }

    /// Create a record (POST) with an opaque payload
    pub async fn save<B>(&self, body: &B) -> Result<ResourceResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(HttpMethod::Post, None, &QueryParams::new(), Some(body))
            .await
    }

    /// Replace an existing record (PUT)
    pub async fn update<B>(&self, id: &str, body: &B) -> Result<ResourceResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(HttpMethod::Put, Some(id), &QueryParams::new(), Some(body))
            .await
    }

    /// Delete a record (DELETE)
    pub async fn remove(&self, id: &str) -> Result<ResourceResponse> {
        self.dispatch(HttpMethod::Delete, Some(id), &QueryParams::new(), None)
            .await
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        id: Option<&str>,
        params: &QueryParams,
        body: Option<serde_json::Value>,
    ) -> Result<ResourceResponse> {
        let path = match id {
            Some(id) => format!("{}/{}", self.path, id),
            None => self.path.clone(),
        };

        let mut merged = self.default_params.clone();
        merged.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut request = TransportRequest::new(method, path).with_params(merged);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        tracing::debug!(method = %method, path = %self.path, "Resource operation");

        // Errors surface unchanged from the transport
        self.transport.dispatch(request).await
    }
}
