//! Response envelope handling.
//!
//! The backend wraps most payloads as `{ "success": bool, "data": T,
//! "message": string }`. Bodies without that envelope are taken as the
//! payload itself.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdminError, AdminResult};

/// Message used when a failed envelope carries none.
const DEFAULT_FAILURE_MESSAGE: &str = "The request was not successful";

/// The conventional response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The payload.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// A successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A failed envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Parses a 2xx body and unwraps the envelope if there is one.
///
/// An empty body is read as `null`, so `()` and `Option<T>` payloads work for
/// bodiless responses.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> AdminResult<T> {
    let value: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| AdminError::Decode {
            message: e.to_string(),
        })?
    };

    let payload = match value {
        Value::Object(mut map) if map.get("success").is_some_and(Value::is_boolean) => {
            if map.get("success").and_then(Value::as_bool) != Some(true) {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string();
                return Err(AdminError::Api { message });
            }
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| AdminError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_unwraps_success_envelope() {
        let item: Item = unwrap_envelope(r#"{"success": true, "data": {"id": 7}}"#).unwrap();
        assert_eq!(item, Item { id: 7 });
    }

    #[test]
    fn test_bare_body_is_payload() {
        let items: Vec<Item> = unwrap_envelope(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_object_with_non_boolean_success_is_payload() {
        let value: Value = unwrap_envelope(r#"{"success": "yes", "id": 3}"#).unwrap();
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_failed_envelope_surfaces_message() {
        let result: AdminResult<Item> =
            unwrap_envelope(r#"{"success": false, "message": "invalid category"}"#);
        match result {
            Err(AdminError::Api { message }) => assert_eq!(message, "invalid category"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_envelope_without_message() {
        let result: AdminResult<()> = unwrap_envelope(r#"{"success": false}"#);
        match result {
            Err(AdminError::Api { message }) => assert_eq!(message, DEFAULT_FAILURE_MESSAGE),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_is_null() {
        assert!(unwrap_envelope::<()>("").is_ok());
        let nothing: Option<Item> = unwrap_envelope("  ").unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_success_envelope_without_data() {
        let body = r#"{"success": true, "message": "deleted"}"#;
        let nothing: Option<Item> = unwrap_envelope(body).unwrap();
        assert_eq!(nothing, None);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let result: AdminResult<Item> = unwrap_envelope("<html>");
        assert!(matches!(result, Err(AdminError::Decode { .. })));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let result: AdminResult<Item> = unwrap_envelope(r#"{"success": true, "data": "seven"}"#);
        assert!(matches!(result, Err(AdminError::Decode { .. })));

        let body = r#"{"success": true, "data": {"id": "x"}}"#;
        let result: AdminResult<Item> = unwrap_envelope(body);
        assert!(matches!(result, Err(AdminError::Decode { .. })));
    }

    #[test]
    fn test_envelope_serialization() {
        let json = serde_json::to_string(&ApiEnvelope::ok(5)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":5}"#);
        let json = serde_json::to_string(&ApiEnvelope::<i32>::failure("nope")).unwrap();
        assert!(json.contains(r#""message":"nope""#));
    }
}
