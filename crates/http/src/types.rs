//! Response envelopes shared by several endpoints

use serde::{Deserialize, Serialize};

/// `{"data": [...]}` wrapper used by lookup endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Body sent to logout; the backend expects an empty JSON object
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// What the backend said about an accepted write.
///
/// Create and update answers vary (full record, `{id, message}`, or no body
/// at all), so every field is optional and unreadable bodies decode to the
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriteAck {
    pub id: Option<i64>,
    pub message: Option<String>,
}

impl WriteAck {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
