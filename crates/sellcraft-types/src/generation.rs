//! Model-boundary request/response types.
//!
//! These types model the data shapes for generative-model interactions:
//! generation requests with optional structured-output schemas or image
//! options, responses carrying text and/or inline image data, and the
//! error taxonomy the rest of the system classifies against.

use serde::{Deserialize, Serialize};

/// Image generation options for thumbnail requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Aspect ratio string understood by the provider ("3:2").
    pub aspect_ratio: String,
    /// Resolution tier ("1K", "2K"); None leaves the provider default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl ImageOptions {
    /// Marketplace thumbnail ratio.
    pub fn thumbnail() -> Self {
        Self {
            aspect_ratio: "3:2".to_string(),
            resolution: None,
        }
    }

    /// High-quality tier used when the thumbnail embeds text.
    pub fn thumbnail_high_quality() -> Self {
        Self {
            aspect_ratio: "3:2".to_string(),
            resolution: Some("2K".to_string()),
        }
    }
}

/// Knobs attached to a single generation call.
///
/// Prompt builders fill this in; providers translate it to their wire
/// format. A `response_schema` requests structured JSON output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// JSON Schema constraining the response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Present only for image generation requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageOptions>,
}

/// A single generation request: one instruction, one model, one config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub instruction: String,
    #[serde(default)]
    pub config: GenerationConfig,
}

/// Inline image payload returned by an image-capable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl InlineImage {
    /// Render as a data URL suitable for direct embedding.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Response from a generation call.
///
/// Text responses carry `text`; image responses carry `image`; a
/// provider may return both for mixed-part candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<InlineImage>,
}

impl GenerationResponse {
    /// Text body, or empty string when the response had none.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Errors from generation-provider operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("requested entity was not found")]
    EntityNotFound,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("response contained no usable content")]
    EmptyResponse,
}

impl GenerationError {
    /// True when the error signals the stored credential is no longer
    /// valid for this project and the user must re-enter it.
    ///
    /// The provider reports a deleted or rotated key as a missing
    /// entity rather than an auth failure, so both map here.
    pub fn invalidates_credential(&self) -> bool {
        matches!(
            self,
            GenerationError::EntityNotFound | GenerationError::AuthenticationFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_options_thumbnail() {
        let opts = ImageOptions::thumbnail();
        assert_eq!(opts.aspect_ratio, "3:2");
        assert!(opts.resolution.is_none());
        let hq = ImageOptions::thumbnail_high_quality();
        assert_eq!(hq.resolution.as_deref(), Some("2K"));
    }

    #[test]
    fn test_inline_image_data_url() {
        let img = InlineImage {
            mime_type: "image/png".into(),
            data: "AAAA".into(),
        };
        assert_eq!(img.to_data_url(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_entity_not_found_invalidates_credential() {
        assert!(GenerationError::EntityNotFound.invalidates_credential());
        assert!(GenerationError::AuthenticationFailed.invalidates_credential());
        assert!(!GenerationError::RateLimited { retry_after_ms: None }.invalidates_credential());
        assert!(
            !GenerationError::Provider {
                message: "boom".into()
            }
            .invalidates_credential()
        );
    }

    #[test]
    fn test_config_serializes_sparsely() {
        let config = GenerationConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
