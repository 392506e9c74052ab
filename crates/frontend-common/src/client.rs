//! Client configuration and initialization

use crate::config::AppConfig;
pub use erp_http::ClientError;
use erp_http::ErpClient;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<ErpClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared API client, building it on first use.
///
/// The session lives in a browser cookie, so the same client serves
/// signed-in and anonymous calls alike.
pub fn api_client() -> Result<ErpClient, ClientError> {
    let mut client_lock = CLIENT
        .lock()
        .map_err(|_| ClientError::Configuration("API client lock poisoned".into()))?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ErpClient::builder()
        .base_url(AppConfig::API_BASE_URL)
        .timeout(AppConfig::REQUEST_TIMEOUT)
        .build()?;
    tracing::debug!(base_url = client.base_url(), "API client initialised");
    *client_lock = Some(client.clone());
    Ok(client)
}
