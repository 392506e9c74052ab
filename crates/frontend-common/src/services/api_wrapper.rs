//! API wrapper utilities for handling authentication errors

use crate::auth::error_handler::trigger_auth_error;
use erp_http::ClientError;

/// Await an API call, reporting a rejected session to the auth provider
pub async fn with_auth_error_handling<T, F>(api_call: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    match api_call.await {
        Ok(result) => Ok(result),
        Err(error) => {
            if error.is_auth_expired() {
                trigger_auth_error();
            }
            Err(error)
        }
    }
}
