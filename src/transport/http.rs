//! reqwest-backed transport implementation

use crate::error::{RegistrationClientError, Result};
use crate::transport::{Transport, TransportRequest};
use crate::types::{ClientConfig, HttpMethod, ResourceResponse};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Production transport issuing real HTTP requests
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(RegistrationClientError::config(
                "Transport base URL is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(config.connection_pool_size)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| RegistrationClientError::transport(e.to_string(), None, None))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join the base URL and a relative resource path
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, request: TransportRequest) -> Result<ResourceResponse> {
        let url = self.build_url(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, url = %url, "Dispatching resource request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistrationClientError::from(e)
            } else {
                RegistrationClientError::transport(
                    format!("Failed to reach backend: {}", e),
                    e.status().map(|s| s.as_u16()),
                    Some(url.clone()),
                )
            }
        })?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        if !status.is_success() {
            let body_text = response.text().await.ok().filter(|t| !t.is_empty());
            tracing::warn!(
                method = %request.method,
                url = %url,
                status = %status.as_u16(),
                "Backend replied with an error status"
            );
            return Err(RegistrationClientError::status(
                status.as_u16(),
                body_text,
                Some(url),
            ));
        }

        let text = response.text().await.map_err(|e| {
            RegistrationClientError::transport(
                e.to_string(),
                Some(status.as_u16()),
                Some(url.clone()),
            )
        })?;

        // Empty replies are legal for verbs like DELETE
        let data = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| RegistrationClientError::parse(e.to_string(), Some(text.clone())))?
        };

        Ok(ResourceResponse {
            status: status.as_u16(),
            headers,
            data,
            received_at: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }

    fn is_ready(&self) -> bool {
        !self.base_url.is_empty()
    }
}
