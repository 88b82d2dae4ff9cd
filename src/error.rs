use serde::Deserialize;

/// Errors raised while talking to the hosted speech and language services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Transport-level failure (DNS, connection refused, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A long-running operation finished with an error payload
    #[error("Operation {name} failed: {message}")]
    Operation { name: String, message: String },

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Google's JSON error envelope: `{"error": {"code": .., "message": .., "status": ..}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ErrorDetail {
    /// Human-readable message, falling back to the status string.
    pub fn describe(&self) -> String {
        match (&self.message, &self.status) {
            (Some(message), Some(status)) => format!("{status}: {message}"),
            (Some(message), None) => message.clone(),
            (None, Some(status)) => status.clone(),
            (None, None) => "Unknown error".to_string(),
        }
    }
}

impl ServiceError {
    /// Builds an API error from a non-success status and raw body text.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.describe(),
            Err(_) => body.to_string(),
        };
        Self::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_google_envelope() {
        let body = r#"{"error": {"code": 400, "message": "Invalid recognition config", "status": "INVALID_ARGUMENT"}}"#;
        let err = ServiceError::from_response_body(400, body);
        assert_eq!(
            err.to_string(),
            "API error (400): INVALID_ARGUMENT: Invalid recognition config"
        );
    }

    #[test]
    fn test_api_error_from_plain_body() {
        let err = ServiceError::from_response_body(502, "Bad Gateway");
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }

    #[test]
    fn test_error_detail_without_fields() {
        assert_eq!(ErrorDetail::default().describe(), "Unknown error");
    }

    #[test]
    fn test_operation_error_display() {
        let err = ServiceError::Operation {
            name: "12345".to_string(),
            message: "audio too long".to_string(),
        };
        assert_eq!(err.to_string(), "Operation 12345 failed: audio too long");
    }
}
