//! Creator wizard service: ideas, listing detail, thumbnails.

use tokio::sync::Mutex;

use sellcraft_types::generation::GenerationRequest;
use sellcraft_types::idea::{IdeaId, SkillIdea, UserInput};
use sellcraft_types::wizard::{CreatorState, CreatorStep};

use crate::credential::{ensure_credential, CredentialGate};
use crate::parse::{parse_ideas, scrub_markdown};
use crate::prompt::{idea as idea_prompt, listing as listing_prompt, thumbnail};
use crate::provider::{ModelIds, ModelInvoker};
use crate::storage::{save_ideas_degrading, SnapshotSlot, SnapshotStore};
use crate::wizard::CreatorStateExt;

use super::ToolError;

/// Orchestrates the creator wizard.
///
/// Owns the wizard state behind a mutex; every public operation reads
/// the committed state, runs its round-trip, and commits the new state
/// plus snapshot before returning. A failure mid-flow leaves the prior
/// committed state in place (or rolls back to the Ideas step during
/// detail generation).
pub struct CreatorService<M, S, G> {
    invoker: M,
    store: S,
    gate: G,
    models: ModelIds,
    state: Mutex<CreatorState>,
}

impl<M, S, G> CreatorService<M, S, G>
where
    M: ModelInvoker,
    S: SnapshotStore,
    G: CredentialGate,
{
    pub fn new(invoker: M, store: S, gate: G, models: ModelIds) -> Self {
        Self {
            invoker,
            store,
            gate,
            models,
            state: Mutex::new(CreatorState::default()),
        }
    }

    /// Current committed wizard state.
    pub async fn state(&self) -> CreatorState {
        self.state.lock().await.clone()
    }

    /// Rebuild state from the snapshot slots.
    ///
    /// Saved ideas resume at the Ideas step. A corrupt ideas snapshot is
    /// treated as absent and its slot cleared.
    pub async fn restore(&self) -> CreatorState {
        let raw_text = self
            .store
            .get(SnapshotSlot::RawInput)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let ideas = match self.store.get(SnapshotSlot::Ideas).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<SkillIdea>>(&json) {
                Ok(ideas) => ideas,
                Err(err) => {
                    tracing::warn!(error = %err, "idea snapshot is corrupt, clearing");
                    if let Err(err) = self.store.clear(SnapshotSlot::Ideas).await {
                        tracing::error!(error = %err, "snapshot slot clear failed");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "idea snapshot read failed");
                Vec::new()
            }
        };

        let mut state = self.state.lock().await;
        state.restore(raw_text, ideas);
        state.clone()
    }

    /// Run an idea round from the seller's raw input.
    ///
    /// The input may be empty; the prompt handles that itself.
    pub async fn generate_ideas(&self, raw_text: String) -> Result<CreatorState, ToolError> {
        if !ensure_credential(&self.gate).await {
            return Err(ToolError::CredentialMissing);
        }

        let input = UserInput::new(raw_text.clone());
        let prompt = idea_prompt::build(&input);
        let request = GenerationRequest {
            model: self.models.text.clone(),
            instruction: prompt.instruction,
            config: prompt.config,
        };
        let response = self.invoker.generate(&request).await?;
        let ideas = parse_ideas(response.text_or_empty())?;

        tracing::info!(count = ideas.len(), "idea round complete");

        let mut state = self.state.lock().await;
        state.ideas_ready(raw_text.clone(), ideas);
        if let Err(err) = self.store.put(SnapshotSlot::RawInput, &raw_text).await {
            tracing::warn!(error = %err, "raw input snapshot write failed");
        }
        save_ideas_degrading(&self.store, &state.ideas).await;
        Ok(state.clone())
    }

    /// Open an idea's detail view, generating the listing if absent.
    ///
    /// Generation failure rolls the wizard back to the Ideas step and
    /// surfaces the error.
    pub async fn select_idea(&self, id: IdeaId) -> Result<CreatorState, ToolError> {
        let idea = {
            let mut state = self.state.lock().await;
            if !state.begin_detail(id) {
                return Err(if state.ideas.iter().any(|i| i.id == id) {
                    ToolError::InvalidState(format!("cannot select from step {}", state.step))
                } else {
                    ToolError::UnknownIdea
                });
            }
            // The GeneratingDetail step is a committed, visible state.
            state.selected_idea().cloned().ok_or(ToolError::UnknownIdea)?
        };

        if let Some(content) = idea.generated_content.clone() {
            let mut state = self.state.lock().await;
            state.detail_ready(content);
            return Ok(state.clone());
        }

        match self.generate_listing(&idea).await {
            Ok(content) => {
                let mut state = self.state.lock().await;
                state.detail_ready(content);
                save_ideas_degrading(&self.store, &state.ideas).await;
                Ok(state.clone())
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.detail_failed();
                Err(err)
            }
        }
    }

    async fn generate_listing(&self, idea: &SkillIdea) -> Result<String, ToolError> {
        if !ensure_credential(&self.gate).await {
            return Err(ToolError::CredentialMissing);
        }
        let prompt = listing_prompt::build(idea);
        let request = GenerationRequest {
            model: self.models.text.clone(),
            instruction: prompt.instruction,
            config: prompt.config,
        };
        let response = self.invoker.generate(&request).await?;
        Ok(scrub_markdown(response.text_or_empty()))
    }

    /// Build the thumbnail prompt text for an idea without generating
    /// an image. The tagline is shortened first when needed.
    pub async fn thumbnail_prompt(
        &self,
        id: IdeaId,
        high_quality: bool,
    ) -> Result<String, ToolError> {
        let idea = self.idea_by_id(id).await?;
        let (title, catchphrase) = thumbnail::thumbnail_texts(&idea);
        let tagline = if high_quality {
            self.shortened_tagline(&catchphrase).await
        } else {
            String::new()
        };
        Ok(thumbnail::build_image(&idea, &title, &tagline, high_quality).instruction)
    }

    /// Generate a thumbnail for an idea and attach it to the state.
    ///
    /// Returns the image as a data URL.
    pub async fn generate_thumbnail(
        &self,
        id: IdeaId,
        high_quality: bool,
    ) -> Result<String, ToolError> {
        if !ensure_credential(&self.gate).await {
            return Err(ToolError::CredentialMissing);
        }

        let idea = self.idea_by_id(id).await?;
        let (title, catchphrase) = thumbnail::thumbnail_texts(&idea);
        let tagline = if high_quality {
            self.shortened_tagline(&catchphrase).await
        } else {
            String::new()
        };

        let prompt = thumbnail::build_image(&idea, &title, &tagline, high_quality);
        let model = if high_quality {
            self.models.image_high_quality.clone()
        } else {
            self.models.image_standard.clone()
        };
        let request = GenerationRequest {
            model,
            instruction: prompt.instruction,
            config: prompt.config,
        };
        let response = self.invoker.generate(&request).await?;
        let image = response
            .image
            .ok_or(sellcraft_types::generation::GenerationError::EmptyResponse)?;
        let data_url = image.to_data_url();

        let mut state = self.state.lock().await;
        state.selected = Some(id);
        state.thumbnail_ready(data_url.clone());
        save_ideas_degrading(&self.store, &state.ideas).await;
        Ok(data_url)
    }

    /// Remove one idea from the list and snapshot.
    pub async fn delete_idea(&self, id: IdeaId) -> Result<CreatorState, ToolError> {
        let mut state = self.state.lock().await;
        if !state.ideas.iter().any(|idea| idea.id == id) {
            return Err(ToolError::UnknownIdea);
        }
        state.delete_idea(id);
        save_ideas_degrading(&self.store, &state.ideas).await;
        Ok(state.clone())
    }

    /// Discard all wizard state and both snapshot slots.
    pub async fn reset(&self) -> CreatorState {
        let mut state = self.state.lock().await;
        state.reset();
        for slot in [SnapshotSlot::Ideas, SnapshotSlot::RawInput] {
            if let Err(err) = self.store.clear(slot).await {
                tracing::warn!(slot = %slot, error = %err, "snapshot clear failed");
            }
        }
        state.clone()
    }

    async fn idea_by_id(&self, id: IdeaId) -> Result<SkillIdea, ToolError> {
        let state = self.state.lock().await;
        state
            .ideas
            .iter()
            .find(|idea| idea.id == id)
            .cloned()
            .ok_or(ToolError::UnknownIdea)
    }

    /// Tagline for the high-quality thumbnail: verbatim when it already
    /// fits, model-compressed otherwise, hard-truncated on failure or
    /// overshoot.
    async fn shortened_tagline(&self, catchphrase: &str) -> String {
        if catchphrase.is_empty() {
            return String::new();
        }
        if catchphrase.chars().count() <= thumbnail::TAGLINE_MAX_CHARS {
            return catchphrase.to_string();
        }

        let prompt = thumbnail::build_shorten_tagline(catchphrase);
        let request = GenerationRequest {
            model: self.models.text.clone(),
            instruction: prompt.instruction,
            config: prompt.config,
        };
        match self.invoker.generate(&request).await {
            Ok(response) => {
                let shortened = response.text_or_empty().trim().to_string();
                if shortened.is_empty() || shortened.chars().count() > 20 {
                    thumbnail::truncate_tagline(if shortened.is_empty() {
                        catchphrase
                    } else {
                        &shortened
                    })
                } else {
                    shortened
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "tagline shortening failed, truncating");
                thumbnail::truncate_tagline(catchphrase)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
