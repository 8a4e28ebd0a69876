//! Registration resource factory

use crate::resource::ResourceClient;
use crate::transport::Transport;
use crate::types::QueryParams;
use std::sync::Arc;

/// Backend path the registration resource is bound to
pub const REGISTER_PATH: &str = "api/register";

/// Create the resource client for the account registration endpoint.
///
/// The returned client is bound to [`REGISTER_PATH`] with no default
/// parameters, so only the standard verb methods apply.
pub fn create_register_resource(transport: Arc<dyn Transport>) -> ResourceClient {
    ResourceClient::new(REGISTER_PATH, QueryParams::new(), transport)
}
