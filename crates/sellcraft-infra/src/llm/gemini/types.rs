//! Gemini `generateContent` API types.
//!
//! Gemini-specific request/response structures used for HTTP
//! communication. They are NOT the generic generation types from
//! sellcraft-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

use sellcraft_types::generation::{GenerationConfig, GenerationRequest};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

/// One content entry; requests here always carry a single user turn.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiRequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequestPart {
    pub text: String,
}

/// Wire form of the generation knobs.
///
/// Structured text output sets `responseMimeType` to `application/json`
/// together with `responseJsonSchema`; image requests set `imageConfig`
/// instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<GeminiImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiImageConfig {
    pub aspect_ratio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
}

impl GeminiRequest {
    /// Translate a provider-agnostic request to the Gemini wire format.
    pub fn from_generation(request: &GenerationRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiRequestPart {
                    text: request.instruction.clone(),
                }],
            }],
            generation_config: wire_config(&request.config),
        }
    }
}

fn wire_config(config: &GenerationConfig) -> Option<GeminiGenerationConfig> {
    if config.response_schema.is_none()
        && config.temperature.is_none()
        && config.max_output_tokens.is_none()
        && config.image.is_none()
    {
        return None;
    }

    Some(GeminiGenerationConfig {
        response_mime_type: config
            .response_schema
            .as_ref()
            .map(|_| "application/json".to_string()),
        response_json_schema: config.response_schema.clone(),
        temperature: config.temperature,
        max_output_tokens: config.max_output_tokens,
        image_config: config.image.as_ref().map(|img| GeminiImageConfig {
            aspect_ratio: img.aspect_ratio.clone(),
            image_size: img.resolution.clone(),
        }),
    })
}

// ---------------------------------------------------------------------------
// Response payload structs
// ---------------------------------------------------------------------------

/// Top-level success response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

/// One response part: text, inline image data, or something we ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponsePart {
    pub text: Option<String>,
    #[serde(rename = "inlineData")]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorEnvelope {
    pub error: GeminiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
