//! Authentication API client methods

use super::{ClientError, ErpClient};
use crate::types::Empty;
use erp_core::Session;
use erp_core::session::{LoginRequest, LoginResponse};
use erp_core::validation::{RegisterOrgRequest, RegisterOrgResponse};

impl ErpClient {
    /// Sign in; the backend answers with a session cookie
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/v1/auth/login")
            .json(request);
        let response: LoginResponse = self.execute(req).await?;
        tracing::info!(user_id = response.user_id, org_id = response.org_id, "Signed in");
        Ok(response.into())
    }

    /// Register a new organization together with its first admin
    pub async fn register(
        &self,
        request: &RegisterOrgRequest,
    ) -> Result<RegisterOrgResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/v1/auth/register")
            .json(request);
        self.execute(req).await
    }

    /// Identity behind the current session cookie
    pub async fn me(&self) -> Result<Session, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/v1/auth/me");
        self.execute(req).await
    }

    /// End the session
    pub async fn logout(&self) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/v1/auth/logout")
            .json(&Empty {});
        self.execute_empty(req).await
    }
}
