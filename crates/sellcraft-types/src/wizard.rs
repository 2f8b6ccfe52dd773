use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::idea::{IdeaId, SkillIdea};

/// Steps of the creator wizard.
///
/// Forward flow: Input -> Ideas -> GeneratingDetail -> Detail. Backward
/// moves exist (Detail -> Ideas, Ideas -> Input via reset); a failure
/// during detail generation rolls back to Ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorStep {
    Input,
    Ideas,
    GeneratingDetail,
    Detail,
}

impl fmt::Display for CreatorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatorStep::Input => write!(f, "input"),
            CreatorStep::Ideas => write!(f, "ideas"),
            CreatorStep::GeneratingDetail => write!(f, "generating_detail"),
            CreatorStep::Detail => write!(f, "detail"),
        }
    }
}

impl FromStr for CreatorStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input" => Ok(CreatorStep::Input),
            "ideas" => Ok(CreatorStep::Ideas),
            "generating_detail" => Ok(CreatorStep::GeneratingDetail),
            "detail" => Ok(CreatorStep::Detail),
            other => Err(format!("invalid creator step: '{other}'")),
        }
    }
}

/// Full state of the creator wizard.
///
/// Owned by the creator service; handlers only ever see committed
/// states -- a mid-flow failure leaves the previous state in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorState {
    pub step: CreatorStep,
    pub raw_text: String,
    pub ideas: Vec<SkillIdea>,
    /// Id of the idea currently open in the detail step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<IdeaId>,
}

impl Default for CreatorStep {
    fn default() -> Self {
        CreatorStep::Input
    }
}

impl CreatorState {
    /// The currently selected idea, when one exists in the list.
    pub fn selected_idea(&self) -> Option<&SkillIdea> {
        let id = self.selected?;
        self.ideas.iter().find(|idea| idea.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::{IdeaKind, SkillIdea, SkillIdeaDraft};

    fn idea(title: &str) -> SkillIdea {
        SkillIdea::from_draft(SkillIdeaDraft {
            title: title.into(),
            strength: "s".into(),
            solution: "x".into(),
            kind: IdeaKind::Standard,
        })
    }

    #[test]
    fn test_step_roundtrip() {
        for step in [
            CreatorStep::Input,
            CreatorStep::Ideas,
            CreatorStep::GeneratingDetail,
            CreatorStep::Detail,
        ] {
            let s = step.to_string();
            let parsed: CreatorStep = s.parse().unwrap();
            assert_eq!(step, parsed);
        }
    }

    #[test]
    fn test_default_state_is_input() {
        let state = CreatorState::default();
        assert_eq!(state.step, CreatorStep::Input);
        assert!(state.ideas.is_empty());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_selected_idea_lookup() {
        let a = idea("a");
        let b = idea("b");
        let state = CreatorState {
            step: CreatorStep::Detail,
            raw_text: String::new(),
            selected: Some(b.id),
            ideas: vec![a, b.clone()],
        };
        assert_eq!(state.selected_idea().unwrap().id, b.id);
    }
}
