//! Client error types

use erp_core::{ApiErrorBody, FieldErrors};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Missing or expired session
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request rejected with per-field reasons
    #[error("Validation failed ({status}): {message}")]
    Validation {
        status: u16,
        message: String,
        fields: FieldErrors,
    },

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and raw response body
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed = ApiErrorBody::parse(body);
        let message = parsed
            .message
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

        match status.as_u16() {
            code @ (400 | 409 | 422) if !parsed.fields.is_empty() => Self::Validation {
                status: code,
                message,
                fields: parsed.fields,
            },
            400 | 422 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            code => Self::ServerError {
                status: code,
                message,
            },
        }
    }

    /// The session cookie is missing or no longer accepted
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// HTTP status of the failed response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::ServerError { status, .. } | Self::Validation { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Per-field messages to merge into a form
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Message suitable for a snackbar.
    ///
    /// Server-provided text is preferred; transport and decoding failures
    /// use `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Validation { message, .. }
            | Self::Forbidden(message) => message.clone(),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => {
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_statuses() {
        assert!(matches!(
            ClientError::from_response(StatusCode::UNAUTHORIZED, ""),
            ClientError::AuthenticationFailed(m) if m == "Unauthorized"
        ));
        assert!(matches!(
            ClientError::from_response(StatusCode::FORBIDDEN, r#"{"detail":"No access"}"#),
            ClientError::Forbidden(m) if m == "No access"
        ));
        assert!(matches!(
            ClientError::from_response(StatusCode::BAD_GATEWAY, "upstream down"),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn field_errors_become_validation() {
        let err = ClientError::from_response(
            StatusCode::CONFLICT,
            r#"{"errors":{"email":"already registered"}}"#,
        );
        assert_eq!(
            err.field_errors().and_then(|f| f.get("email")),
            Some("already registered")
        );
        assert_eq!(err.user_message("x"), "Please correct the highlighted fields");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn validation_keeps_response_status() {
        let body = r#"{"errors":{"mobile":"invalid"}}"#;
        assert_eq!(
            ClientError::from_response(StatusCode::BAD_REQUEST, body).status(),
            Some(400)
        );
        assert_eq!(
            ClientError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body).status(),
            Some(422)
        );
    }

    #[test]
    fn conflict_without_fields_is_server_error() {
        let err = ClientError::from_response(StatusCode::CONFLICT, r#"{"detail":"Duplicate"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message("x"), "Duplicate");
    }

    #[test]
    fn configuration_uses_fallback_message() {
        let err = ClientError::Configuration("base_url is required".into());
        assert_eq!(err.user_message("Failed to create enquiry"), "Failed to create enquiry");
        assert!(!err.is_auth_expired());
    }
}
