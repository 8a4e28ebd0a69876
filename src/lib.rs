//! Registration Client - typed HTTP accessor for the account registration endpoint
//!
//! A small library binding a resource client to the backend's `api/register`
//! path, with the HTTP transport injected behind a trait seam.

pub mod error;
pub mod resource;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use error::{RegistrationClientError, Result};
pub use resource::{create_register_resource, ResourceClient, ResourceRegistry, REGISTER_PATH};
pub use transport::{create_transport, HttpTransport, Transport, TransportRequest};
pub use types::{
    ClientConfig, HttpMethod, QueryParams, RegistrationReply, RegistrationRequest,
    ResourceResponse,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
