use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a skill idea, wrapping a UUID v7 (time-sortable).
///
/// Ids are assigned locally when a model response is parsed; the model
/// never supplies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdeaId(pub Uuid);

impl IdeaId {
    /// Create a new IdeaId using UUID v7 (time-sortable, collision-resistant).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an IdeaId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for IdeaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IdeaId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Whether an idea targets the mainstream market or a narrow niche.
///
/// Each generation round asks for an even split: 10 standard, 10 niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdeaKind {
    Standard,
    Niche,
}

impl fmt::Display for IdeaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaKind::Standard => write!(f, "standard"),
            IdeaKind::Niche => write!(f, "niche"),
        }
    }
}

impl FromStr for IdeaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(IdeaKind::Standard),
            "niche" => Ok(IdeaKind::Niche),
            other => Err(format!("invalid idea kind: '{other}'")),
        }
    }
}

/// Free-text self description supplied by the seller.
///
/// May legitimately be empty; the idea prompt handles that case itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub raw_text: String,
}

impl UserInput {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// Model-facing shape of one sellable skill idea.
///
/// This is the structured-output contract sent to the model: no id, no
/// local-only fields. `JsonSchema` drives the response schema declaration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillIdeaDraft {
    /// Service title as it would appear on the marketplace.
    pub title: String,
    /// The seller strength this idea builds on.
    pub strength: String,
    /// The buyer problem the service solves.
    pub solution: String,
    /// "standard" or "niche".
    #[serde(rename = "type")]
    pub kind: IdeaKind,
}

/// A sellable skill idea with local bookkeeping attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillIdea {
    pub id: IdeaId,
    pub title: String,
    pub strength: String,
    pub solution: String,
    pub kind: IdeaKind,
    /// Full listing text once the detail step has run for this idea.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_content: Option<String>,
    /// Reference to a generated thumbnail (data URL or object key).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_ref: Option<String>,
}

impl SkillIdea {
    /// Promote a model draft into a full idea, assigning a fresh local id.
    pub fn from_draft(draft: SkillIdeaDraft) -> Self {
        Self {
            id: IdeaId::new(),
            title: draft.title,
            strength: draft.strength,
            solution: draft.solution,
            kind: draft.kind,
            generated_content: None,
            thumbnail_ref: None,
        }
    }

    /// Copy of this idea with the thumbnail reference dropped.
    ///
    /// Used by the snapshot degrade path: thumbnails dominate snapshot
    /// size and are the first thing sacrificed on a quota failure.
    pub fn without_thumbnail(&self) -> Self {
        Self {
            thumbnail_ref: None,
            ..self.clone()
        }
    }
}
