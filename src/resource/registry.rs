//! Composition root for resource clients
//!
//! Wiring happens once at application startup: build the transport, bind
//! each resource, then hand out shared handles. Nothing resolves
//! dependencies by name at call time.

use crate::error::{RegistrationClientError, Result};
use crate::resource::{create_register_resource, ResourceClient, REGISTER_PATH};
use crate::transport::{create_transport, Transport};
use crate::types::ClientConfig;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of constructed resource clients, keyed by bound path
#[derive(Clone)]
pub struct ResourceRegistry {
    resources: Arc<RwLock<HashMap<String, Arc<ResourceClient>>>>,
}

impl ResourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            resources: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Wire the production transport and every known resource
    pub fn bootstrap(config: &ClientConfig) -> Result<Self> {
        let transport: Arc<dyn Transport> = Arc::from(create_transport(config)?);

        let registry = Self::new();
        registry.insert(create_register_resource(transport));
        Ok(registry)
    }

    /// Add a constructed resource client (thread-safe)
    pub fn insert(&self, client: ResourceClient) {
        let mut resources = self.resources.write();
        resources.insert(client.path().to_string(), Arc::new(client));
    }

    /// Look up a resource client by its bound path (thread-safe)
    pub fn resource(&self, path: &str) -> Option<Arc<ResourceClient>> {
        let resources = self.resources.read();
        resources.get(path).cloned()
    }

    /// The registration resource, if wired
    pub fn register_resource(&self) -> Result<Arc<ResourceClient>> {
        self.resource(REGISTER_PATH).ok_or_else(|| {
            RegistrationClientError::config(format!("Resource not wired: {}", REGISTER_PATH))
        })
    }

    /// Paths with a wired client (thread-safe)
    pub fn available_paths(&self) -> Vec<String> {
        let resources = self.resources.read();
        resources.keys().cloned().collect()
    }

    /// Check if any resources are wired (thread-safe)
    pub fn is_ready(&self) -> bool {
        let resources = self.resources.read();
        !resources.is_empty()
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
