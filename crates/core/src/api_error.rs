//! Interpretation of backend error bodies
//!
//! The backend is not consistent about error shapes. Seen in practice:
//! `{"detail": "..."}`, `{"message": "..."}`, a bare JSON string, plain
//! text, `{"errors": {"field": "msg"}}`, validation arrays of the form
//! `{"detail": [{"loc": ["body", "field"], "msg": "..."}]}`, and flat
//! `{"field": "msg"}` objects.

use crate::validation::FieldErrors;
use serde_json::{Map, Value};

/// Message and per-field errors extracted from an error response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub fields: FieldErrors,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(message)) => Self::message(message),
            Ok(Value::Object(map)) => Self::from_object(&map),
            Ok(_) => Self::default(),
            // Not JSON: proxies and crashed workers answer with plain text
            Err(_) if !trimmed.starts_with('<') => Self::message(trimmed.to_string()),
            Err(_) => Self::default(),
        }
    }

    fn message(message: String) -> Self {
        let message = message.trim().to_string();
        Self {
            message: (!message.is_empty()).then_some(message),
            fields: FieldErrors::new(),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let mut parsed = Self::default();

        match map.get("detail") {
            Some(Value::String(detail)) => parsed.message = Some(detail.clone()),
            Some(Value::Array(items)) => {
                for item in items {
                    if let Some((field, msg)) = validation_item(item) {
                        parsed.fields.insert(field, msg);
                    }
                }
            }
            _ => {}
        }

        if parsed.message.is_none() {
            parsed.message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
        }

        if let Some(Value::Object(errors)) = map.get("errors") {
            for (field, value) in errors {
                if let Some(msg) = first_text(value) {
                    parsed.fields.insert(field.clone(), msg);
                }
            }
        }

        if parsed.message.is_none() && parsed.fields.is_empty() {
            for (field, value) in map {
                if let Value::String(msg) = value {
                    parsed.fields.insert(field.clone(), msg.clone());
                }
            }
        }

        if parsed.message.is_none() && !parsed.fields.is_empty() {
            parsed.message = Some("Please correct the highlighted fields".to_string());
        }

        parsed
    }

    /// Message to show, or `fallback` when the body carried none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn validation_item(item: &Value) -> Option<(String, String)> {
    let msg = item.get("msg").and_then(Value::as_str)?;
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str)?;
    Some((field.to_string(), msg.to_string()))
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string() {
        let body = ApiErrorBody::parse(r#"{"detail":"Invalid email or password"}"#);
        assert_eq!(body.message.as_deref(), Some("Invalid email or password"));
        assert!(body.fields.is_empty());
    }

    #[test]
    fn message_key_and_bare_string() {
        assert_eq!(
            ApiErrorBody::parse(r#"{"message":"Org exists"}"#).message.as_deref(),
            Some("Org exists")
        );
        assert_eq!(
            ApiErrorBody::parse(r#""Too many requests""#).message.as_deref(),
            Some("Too many requests")
        );
    }

    #[test]
    fn plain_text_and_html() {
        assert_eq!(
            ApiErrorBody::parse("Bad Gateway").message.as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(ApiErrorBody::parse("<html>oops</html>"), ApiErrorBody::default());
        assert_eq!(ApiErrorBody::parse("   "), ApiErrorBody::default());
    }

    #[test]
    fn validation_array() {
        let body = ApiErrorBody::parse(
            r#"{"detail":[
                {"loc":["body","admin","email"],"msg":"value is not a valid email address","type":"value_error"},
                {"loc":["body","pax_count"],"msg":"ensure this value is greater than 0"}
            ]}"#,
        );
        assert_eq!(body.fields.get("email"), Some("value is not a valid email address"));
        assert_eq!(body.fields.get("pax_count"), Some("ensure this value is greater than 0"));
        assert_eq!(
            body.message.as_deref(),
            Some("Please correct the highlighted fields")
        );
    }

    #[test]
    fn errors_object_keeps_message() {
        let body = ApiErrorBody::parse(
            r#"{"message":"Validation failed","errors":{"email":["already exists"],"mobile":"bad"}}"#,
        );
        assert_eq!(body.message.as_deref(), Some("Validation failed"));
        assert_eq!(body.fields.get("email"), Some("already exists"));
        assert_eq!(body.fields.get("mobile"), Some("bad"));
    }

    #[test]
    fn flat_field_object() {
        let body = ApiErrorBody::parse(r#"{"email":"already exists","code":409}"#);
        assert_eq!(body.fields.get("email"), Some("already exists"));
        assert_eq!(body.fields.len(), 1);
    }

    #[test]
    fn fallback_message() {
        assert_eq!(ApiErrorBody::default().message_or("Failed"), "Failed");
    }
}
