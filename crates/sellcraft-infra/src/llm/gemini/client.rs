//! GeminiInvoker -- concrete [`ModelInvoker`] implementation for the
//! Gemini `generateContent` API.
//!
//! Sends requests to `/v1beta/models/{model}:generateContent` with the
//! API key in the `x-goog-api-key` header. One call covers text,
//! structured JSON, and image generation; the request config selects
//! the mode.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use sellcraft_core::provider::ModelInvoker;
use sellcraft_types::generation::{
    GenerationError, GenerationRequest, GenerationResponse, InlineImage,
};

use super::types::{GeminiErrorEnvelope, GeminiRequest, GeminiResponse};

/// Gemini generative-model invoker.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing HTTP request headers. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiInvoker {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiInvoker {
    /// Create a new Gemini invoker.
    ///
    /// No overall request timeout is set: image generation in
    /// particular can run for minutes, and callers own any deadline.
    /// Only the TCP connect is bounded.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

// GeminiInvoker intentionally does NOT derive Debug to prevent
// accidental exposure of internal state.

/// Map a non-2xx status plus its error body to the generation error
/// taxonomy.
///
/// A deleted or rotated key is reported by the API as a missing entity
/// (404), so that status maps to `EntityNotFound` rather than a generic
/// provider error. 429 splits on the body: quota exhaustion is terminal
/// for the round, plain rate limiting is retryable.
fn map_error_status(
    status: reqwest::StatusCode,
    retry_after_ms: Option<u64>,
    body: &str,
) -> GenerationError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        404 => GenerationError::EntityNotFound,
        401 | 403 => GenerationError::AuthenticationFailed,
        429 => {
            if message.to_lowercase().contains("quota") {
                GenerationError::QuotaExhausted(message)
            } else {
                GenerationError::RateLimited { retry_after_ms }
            }
        }
        _ => GenerationError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

impl ModelInvoker for GeminiInvoker {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let body = GeminiRequest::from_generation(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    GenerationError::Network(e.to_string())
                } else {
                    GenerationError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1000);
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, retry_after_ms, &error_body));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            GenerationError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        // Collect text and the first inline image across the first
        // candidate's parts.
        let mut text = String::new();
        let mut image: Option<InlineImage> = None;
        if let Some(content) = gemini_resp
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
        {
            for part in &content.parts {
                if let Some(t) = &part.text {
                    text.push_str(t);
                }
                if image.is_none() {
                    if let Some(data) = &part.inline_data {
                        image = Some(InlineImage {
                            mime_type: data.mime_type.clone(),
                            data: data.data.clone(),
                        });
                    }
                }
            }
        }

        if text.is_empty() && image.is_none() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(GenerationResponse {
            text: (!text.is_empty()).then_some(text),
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoker_name() {
        let invoker = GeminiInvoker::new(SecretString::from("test-key-not-real"));
        assert_eq!(invoker.name(), "gemini");
    }

    #[test]
    fn test_url_layout() {
        let invoker = GeminiInvoker::new(SecretString::from("test-key"))
            .with_base_url("http://localhost:9999".to_string());
        assert_eq!(
            invoker.url("gemini-3-flash-preview"),
            "http://localhost:9999/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_404_maps_to_entity_not_found() {
        let err = map_error_status(
            reqwest::StatusCode::NOT_FOUND,
            None,
            r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#,
        );
        assert!(matches!(err, GenerationError::EntityNotFound));
        assert!(err.invalidates_credential());
    }

    #[test]
    fn test_auth_statuses_map_to_authentication_failed() {
        for status in [reqwest::StatusCode::UNAUTHORIZED, reqwest::StatusCode::FORBIDDEN] {
            let err = map_error_status(status, None, "");
            assert!(matches!(err, GenerationError::AuthenticationFailed));
        }
    }

    #[test]
    fn test_429_quota_message_maps_to_quota_exhausted() {
        let err = map_error_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            None,
            r#"{"error":{"code":429,"message":"Quota exceeded for quota metric","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        match err {
            GenerationError::QuotaExhausted(message) => {
                assert!(message.contains("Quota exceeded"));
            }
            other => panic!("expected QuotaExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_429_without_quota_maps_to_rate_limited() {
        let err = map_error_status(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            Some(30_000),
            r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check requests per minute).","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert!(matches!(
            err,
            GenerationError::RateLimited {
                retry_after_ms: Some(30_000)
            }
        ));
    }

    #[test]
    fn test_other_status_carries_provider_message() {
        let err = map_error_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            None,
            r#"{"error":{"code":500,"message":"Internal error","status":"INTERNAL"}}"#,
        );
        match err {
            GenerationError::Provider { message } => {
                assert!(message.contains("500"));
                assert!(message.contains("Internal error"));
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_error_body_passes_through() {
        let err = map_error_status(reqwest::StatusCode::BAD_GATEWAY, None, "upstream fell over");
        match err {
            GenerationError::Provider { message } => {
                assert!(message.contains("upstream fell over"));
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }
}
