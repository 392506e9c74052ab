//! Authentication API service

use crate::client::api_client;
use erp_core::Session;
use erp_core::session::LoginRequest;
use erp_core::validation::{RegisterOrgRequest, RegisterOrgResponse};
use erp_http::ClientError;

/// Authentication API service
#[derive(Clone, Default)]
pub struct AuthService;

impl AuthService {
    pub const fn new() -> Self {
        Self
    }

    /// Sign in with email and password.
    ///
    /// A 401 here means bad credentials, not an expired session, so it is
    /// not reported to the global handler.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        api_client()?.login(request).await
    }

    pub async fn register(
        &self,
        request: &RegisterOrgRequest,
    ) -> Result<RegisterOrgResponse, ClientError> {
        api_client()?.register(request).await
    }

    /// Identity behind the session cookie, if any
    pub async fn me(&self) -> Result<Session, ClientError> {
        api_client()?.me().await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        api_client()?.logout().await
    }
}
