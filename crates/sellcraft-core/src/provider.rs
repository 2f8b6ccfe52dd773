//! ModelInvoker trait definition.
//!
//! This is the core abstraction over the generative-model backend.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! concrete HTTP client lives in sellcraft-infra.

use sellcraft_types::generation::{GenerationError, GenerationRequest, GenerationResponse};

/// Trait for generative-model backends.
///
/// One method covers both text and image generation; the request's
/// `GenerationConfig` selects the mode.
pub trait ModelInvoker: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    ///
    /// No timeout is applied here: generation calls are allowed to run
    /// as long as the provider takes.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, GenerationError>> + Send;
}

/// Model identifiers used by the tools, one per workload.
#[derive(Debug, Clone)]
pub struct ModelIds {
    /// Text workloads: ideas, listings, posts, surveys, tagline shortening.
    pub text: String,
    /// Standard-quality thumbnail generation.
    pub image_standard: String,
    /// High-quality thumbnail generation (2K, embedded text).
    pub image_high_quality: String,
}

impl Default for ModelIds {
    fn default() -> Self {
        Self {
            text: "gemini-3-flash-preview".to_string(),
            image_standard: "gemini-2.5-flash-image".to_string(),
            image_high_quality: "gemini-3-pro-image-preview".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_ids() {
        let ids = ModelIds::default();
        assert_eq!(ids.text, "gemini-3-flash-preview");
        assert_eq!(ids.image_standard, "gemini-2.5-flash-image");
        assert_eq!(ids.image_high_quality, "gemini-3-pro-image-preview");
    }
}
