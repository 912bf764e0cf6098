use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every LEDAT endpoint.
///
/// Expected failures (validation errors, business-rule rejections) arrive as
/// `status == false` with a human-readable `message` and usually a numeric
/// `code`; they are ordinary values, never transport errors. The server
/// localizes `message` according to the `Accept-Language` header the client
/// attaches to each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Success indicator. The upstream API is inconsistent between `status`
    /// and `success` across endpoints; both spellings deserialize here.
    #[serde(alias = "success")]
    pub status: bool,

    /// Human-readable message, suitable for direct display.
    #[serde(default)]
    pub message: String,

    /// Payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error code, present on business failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// Envelope for endpoints whose payload the client does not interpret
/// (acknowledgement-style responses).
pub type Acknowledgement = ApiResponse<serde_json::Value>;

impl<T> ApiResponse<T> {
    /// Whether the server reported success.
    pub fn is_ok(&self) -> bool {
        self.status
    }

    /// The payload, if the server reported success and sent one.
    pub fn into_data(self) -> Option<T> {
        if self.status {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_success_envelope() {
        let json = r#"{"status": true, "message": "OK", "data": {"id": 7}}"#;
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(envelope.is_ok());
        assert_eq!(envelope.message, "OK");
        assert_eq!(envelope.data.unwrap()["id"], 7);
        assert!(envelope.code.is_none());
    }

    #[test]
    fn test_failure_envelope_with_code() {
        let json = r#"{"status": false, "message": "NIF inválido", "code": 422}"#;
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(!envelope.is_ok());
        assert_eq!(envelope.message, "NIF inválido");
        assert_eq!(envelope.code, Some(422));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_success_alias_spelling() {
        // Some endpoints say "success" instead of "status"
        let json = r#"{"success": true, "message": "OK"}"#;
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(envelope.status);
    }

    #[test]
    fn test_missing_message_defaults_empty() {
        let json = r#"{"status": true}"#;
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(envelope.message.is_empty());
    }

    #[test]
    fn test_typed_payload() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: u64,
        }

        let json = r#"{"status": true, "message": "", "data": [{"id": 1}, {"id": 2}]}"#;
        let envelope: ApiResponse<Vec<Item>> =
            serde_json::from_str(json).expect("Should deserialize");

        let items = envelope.into_data().expect("Should carry data");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_into_data_on_failure_is_none() {
        // A failure envelope never yields a payload, even if one is present
        let envelope = ApiResponse {
            status: false,
            message: "rejected".to_string(),
            data: Some(42),
            code: Some(400),
        };

        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn test_into_data_on_success() {
        let envelope = ApiResponse {
            status: true,
            message: String::new(),
            data: Some("payload".to_string()),
            code: None,
        };

        assert_eq!(envelope.into_data(), Some("payload".to_string()));
    }
}
