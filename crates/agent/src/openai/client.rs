//! `OpenAI` API client for NL-to-SQL translation.
//!
//! One blocking call per user action, no retry or backoff. A failed call is
//! surfaced as error text by the console route rather than propagated.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::OpenAiConfig;

use super::error::{ApiErrorResponse, OpenAiError};
use super::types::{ChatRequest, ChatResponse, Message};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The static translation prompt. The user's question is interpolated into
/// `{query}`; nothing else (no schema, no examples) is sent.
const PROMPT_TEMPLATE: &str = "You are an expert SQL translator. \
Translate the following natural language query into a SQL query:\nQuery: {query}\n";

/// `OpenAI` API client.
///
/// Wraps a reqwest client with bearer authentication and exposes the single
/// translation operation the console needs.
#[derive(Clone)]
pub struct OpenAiClient {
    inner: Arc<OpenAiClientInner>,
}

struct OpenAiClientInner {
    client: reqwest::Client,
    model: String,
}

impl OpenAiClient {
    /// Create a new `OpenAI` client.
    ///
    /// # Arguments
    ///
    /// * `config` - `OpenAI` configuration containing API key and model
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &OpenAiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(OpenAiClientInner {
                client,
                model: config.model.clone(),
            }),
        }
    }

    /// Translate a natural-language question into a SQL string.
    ///
    /// The reply is returned as-is apart from trimming and unwrapping a
    /// surrounding markdown code fence; it is not validated as SQL.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, the API returns an error
    /// response, or the completion carries no text.
    #[instrument(skip(self, question), fields(model = %self.inner.model))]
    pub async fn translate(&self, question: &str) -> Result<String, OpenAiError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            messages: vec![Message::user(render_prompt(question))],
            temperature: 0.0,
        };

        let response = self
            .inner
            .client
            .post(OPENAI_API_URL)
            .json(&request)
            .send()
            .await?;

        let response = self.handle_response(response).await?;

        let text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(strip_code_fences)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(OpenAiError::EmptyCompletion);
        }

        Ok(text.to_string())
    }

    /// Handle a response, decoding the body or mapping the error status.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ChatResponse, OpenAiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| OpenAiError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(handle_error_status(status, response).await)
        }
    }
}

/// Map an error status code to an `OpenAiError`.
async fn handle_error_status(status: reqwest::StatusCode, response: reqwest::Response) -> OpenAiError {
    // Check for rate limiting
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return OpenAiError::RateLimited(retry_after);
    }

    // Check for unauthorized
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return OpenAiError::Unauthorized("Invalid API key".to_string());
    }

    // Try to parse the API error body
    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                OpenAiError::Api {
                    error_type: api_error.error.error_type,
                    message: api_error.error.message,
                }
            } else {
                OpenAiError::Api {
                    error_type: "unknown".to_string(),
                    message: body,
                }
            }
        }
        Err(e) => OpenAiError::Http(e),
    }
}

/// Interpolate the question into the prompt template.
fn render_prompt(question: &str) -> String {
    PROMPT_TEMPLATE.replace("{query}", question)
}

/// Unwrap a markdown code fence around the reply, if present.
///
/// Hosted models routinely answer with ```` ```sql ... ``` ````; the inner
/// text is the statement the execution engine needs.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // The opening fence line may carry an info string ("sql").
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
