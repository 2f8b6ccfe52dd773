//! Survey-design service.

use sellcraft_types::generation::GenerationRequest;
use sellcraft_types::survey::SurveyPattern;

use crate::credential::{ensure_credential, CredentialGate};
use crate::gas::compile_form_script;
use crate::parse::parse_survey_patterns;
use crate::prompt::survey;
use crate::provider::{ModelIds, ModelInvoker};

use super::ToolError;

/// Designs post-service survey patterns and compiles them to Apps
/// Script.
pub struct SurveyorService<M, G> {
    invoker: M,
    gate: G,
    models: ModelIds,
}

impl<M, G> SurveyorService<M, G>
where
    M: ModelInvoker,
    G: CredentialGate,
{
    pub fn new(invoker: M, gate: G, models: ModelIds) -> Self {
        Self {
            invoker,
            gate,
            models,
        }
    }

    /// Run a survey round: three A/B/C patterns from the listing body.
    ///
    /// An empty body is rejected before any model call. Patterns are
    /// independent values; selecting one later never mutates siblings.
    pub async fn generate_patterns(
        &self,
        service_body: &str,
        price_hint: Option<&str>,
    ) -> Result<Vec<SurveyPattern>, ToolError> {
        if service_body.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }
        if !ensure_credential(&self.gate).await {
            return Err(ToolError::CredentialMissing);
        }

        let prompt = survey::build(service_body, price_hint);
        let request = GenerationRequest {
            model: self.models.text.clone(),
            instruction: prompt.instruction,
            config: prompt.config,
        };
        let response = self.invoker.generate(&request).await?;
        let patterns = parse_survey_patterns(response.text_or_empty())?;

        tracing::info!(count = patterns.len(), "survey round complete");
        Ok(patterns)
    }

    /// Compile one pattern to its Apps Script artifact.
    pub fn compile_script(&self, pattern: &SurveyPattern) -> String {
        compile_form_script(pattern)
    }
}
