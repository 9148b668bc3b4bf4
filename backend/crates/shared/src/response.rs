//! Response Envelope
//!
//! Every endpoint wraps its JSON body in the same envelope:
//! `{"success": bool, "message"?: string, "data"?: ...}`.
//! Error bodies are produced by the `AppError` response mapping; this type
//! covers the success side.

use std::borrow::Cow;

use serde::Serialize;

/// Success envelope for JSON responses.
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let body = ApiResponse::data(vec![1, 2, 3]).with_message("Numbers fetched");
/// let ack = ApiResponse::message("User deleted successfully");
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a data payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Add a human-readable message.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Success with only a message, no payload.
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope() {
        let body = ApiResponse::data(7);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 7);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_envelope() {
        let body = ApiResponse::message("done");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "done");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_data_with_message() {
        let body = ApiResponse::data("x").with_message("ok");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"], "x");
    }
}
