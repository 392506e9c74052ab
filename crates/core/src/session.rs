//! Authenticated session identity

use serde::{Deserialize, Serialize};

/// Landing page after login when no valid return path is known
pub const DASHBOARD_PATH: &str = "/app/dashboard";

const PUBLIC_PATHS: [&str; 2] = ["/login", "/register"];

/// Identity of the signed-in user as reported by the backend.
///
/// The session itself lives in an HTTP-only cookie; this is only the
/// client's view of who that cookie belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub org_id: i64,
    pub email: String,
}

impl Session {
    /// Initial used for the profile avatar
    pub fn initial(&self) -> char {
        self.email
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body; carries at least the session identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub org_id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Self {
            user_id: res.user_id,
            org_id: res.org_id,
            email: res.email,
        }
    }
}

/// Pick where to send the user after login.
///
/// Only absolute in-app paths are honoured; protocol-relative URLs and the
/// public auth pages fall back to the dashboard.
pub fn safe_redirect_target(from: Option<&str>) -> String {
    let Some(from) = from.map(str::trim) else {
        return DASHBOARD_PATH.to_string();
    };

    let path = from.split(['?', '#']).next().unwrap_or_default();
    let acceptable = from.starts_with('/')
        && !from.starts_with("//")
        && !from.contains('\\')
        && path != "/"
        && !PUBLIC_PATHS.contains(&path);

    if acceptable {
        from.to_string()
    } else {
        DASHBOARD_PATH.to_string()
    }
}
