//! Error types for the `OpenAI` API client.

use thiserror::Error;

/// Errors that can occur when interacting with the `OpenAI` API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// `OpenAI` API returned an error.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the API (e.g., `insufficient_quota`).
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API answered without any usable completion text.
    #[error("empty completion")]
    EmptyCompletion,
}

/// API error response envelope from `OpenAI`.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    pub message: String,
    /// Machine-readable error code, when present.
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_error_display() {
        let err = OpenAiError::RateLimited(60);
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = OpenAiError::Api {
            error_type: "insufficient_quota".to_string(),
            message: "You exceeded your current quota".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (insufficient_quota): You exceeded your current quota"
        );
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "message": "You exceeded your current quota, please check your plan and billing details.",
                "type": "insufficient_quota",
                "param": null,
                "code": "insufficient_quota"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.error_type, "insufficient_quota");
        assert_eq!(response.error.code.as_deref(), Some("insufficient_quota"));
        assert!(response.error.message.starts_with("You exceeded"));
    }
}
