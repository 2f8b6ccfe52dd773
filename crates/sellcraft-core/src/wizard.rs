//! Creator wizard state transitions.
//!
//! The `CreatorState` struct lives in `sellcraft-types`; this module
//! provides an extension trait (`CreatorStateExt`) with the transition
//! methods. The extension trait pattern is used because Rust does not
//! allow inherent impls for types defined in another crate.
//!
//! Transitions are pure state mutations; persistence and model calls are
//! orchestrated by the creator service, which only commits a transition
//! after its effects have completed.

use sellcraft_types::idea::{IdeaId, SkillIdea};
use sellcraft_types::wizard::{CreatorState, CreatorStep};

/// Extension trait for `CreatorState` transitions.
pub trait CreatorStateExt {
    /// A fresh idea round finished: store the list and show it.
    fn ideas_ready(&mut self, raw_text: String, ideas: Vec<SkillIdea>);

    /// An idea was chosen and detail generation is starting.
    ///
    /// Returns false (no transition) when the id is not in the list or
    /// the wizard is not showing ideas.
    fn begin_detail(&mut self, id: IdeaId) -> bool;

    /// Detail generation finished: attach the listing text and advance.
    fn detail_ready(&mut self, content: String);

    /// Detail generation failed: roll back to the idea list.
    fn detail_failed(&mut self);

    /// Attach a thumbnail reference to the selected idea.
    fn thumbnail_ready(&mut self, thumbnail_ref: String);

    /// Leave the detail view, keeping the generated content.
    fn back_to_ideas(&mut self);

    /// Remove one idea. Clears the selection if it pointed at it.
    fn delete_idea(&mut self, id: IdeaId);

    /// Discard everything and return to the input step.
    fn reset(&mut self);

    /// Rebuild state from a snapshot: saved ideas jump straight to the
    /// Ideas step, an empty snapshot stays at Input.
    fn restore(&mut self, raw_text: String, ideas: Vec<SkillIdea>);
}

impl CreatorStateExt for CreatorState {
    fn ideas_ready(&mut self, raw_text: String, ideas: Vec<SkillIdea>) {
        self.raw_text = raw_text;
        self.ideas = ideas;
        self.selected = None;
        self.step = CreatorStep::Ideas;
    }

    fn begin_detail(&mut self, id: IdeaId) -> bool {
        if self.step != CreatorStep::Ideas && self.step != CreatorStep::Detail {
            return false;
        }
        if !self.ideas.iter().any(|idea| idea.id == id) {
            return false;
        }
        self.selected = Some(id);
        self.step = CreatorStep::GeneratingDetail;
        true
    }

    fn detail_ready(&mut self, content: String) {
        if let Some(id) = self.selected {
            if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
                idea.generated_content = Some(content);
            }
        }
        self.step = CreatorStep::Detail;
    }

    fn detail_failed(&mut self) {
        self.selected = None;
        self.step = CreatorStep::Ideas;
    }

    fn thumbnail_ready(&mut self, thumbnail_ref: String) {
        if let Some(id) = self.selected {
            if let Some(idea) = self.ideas.iter_mut().find(|idea| idea.id == id) {
                idea.thumbnail_ref = Some(thumbnail_ref);
            }
        }
    }

    fn back_to_ideas(&mut self) {
        self.selected = None;
        self.step = CreatorStep::Ideas;
    }

    fn delete_idea(&mut self, id: IdeaId) {
        self.ideas.retain(|idea| idea.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.ideas.is_empty() && self.step == CreatorStep::Ideas {
            self.step = CreatorStep::Input;
        }
    }

    fn reset(&mut self) {
        *self = CreatorState::default();
    }

    fn restore(&mut self, raw_text: String, ideas: Vec<SkillIdea>) {
        self.raw_text = raw_text;
        self.selected = None;
        if ideas.is_empty() {
            self.ideas = Vec::new();
            self.step = CreatorStep::Input;
        } else {
            self.ideas = ideas;
            self.step = CreatorStep::Ideas;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellcraft_types::idea::{IdeaKind, SkillIdeaDraft};

    fn idea(title: &str) -> SkillIdea {
        SkillIdea::from_draft(SkillIdeaDraft {
            title: title.into(),
            strength: "s".into(),
            solution: "x".into(),
            kind: IdeaKind::Standard,
        })
    }

    fn state_with_ideas() -> (CreatorState, IdeaId) {
        let mut state = CreatorState::default();
        let ideas = vec![idea("a"), idea("b")];
        let id = ideas[0].id;
        state.ideas_ready("入力".into(), ideas);
        (state, id)
    }

    #[test]
    fn test_ideas_ready_moves_to_ideas() {
        let (state, _) = state_with_ideas();
        assert_eq!(state.step, CreatorStep::Ideas);
        assert_eq!(state.ideas.len(), 2);
        assert_eq!(state.raw_text, "入力");
    }

    #[test]
    fn test_begin_detail_requires_known_id() {
        let (mut state, id) = state_with_ideas();
        assert!(!state.begin_detail(IdeaId::new()));
        assert_eq!(state.step, CreatorStep::Ideas);

        assert!(state.begin_detail(id));
        assert_eq!(state.step, CreatorStep::GeneratingDetail);
        assert_eq!(state.selected, Some(id));
    }

    #[test]
    fn test_begin_detail_rejected_at_input_step() {
        let mut state = CreatorState::default();
        assert!(!state.begin_detail(IdeaId::new()));
        assert_eq!(state.step, CreatorStep::Input);
    }

    #[test]
    fn test_detail_ready_attaches_content() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.detail_ready("本文".into());
        assert_eq!(state.step, CreatorStep::Detail);
        assert_eq!(
            state.selected_idea().unwrap().generated_content.as_deref(),
            Some("本文")
        );
    }

    #[test]
    fn test_detail_failed_rolls_back() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.detail_failed();
        assert_eq!(state.step, CreatorStep::Ideas);
        assert!(state.selected.is_none());
        // Ideas survive the rollback.
        assert_eq!(state.ideas.len(), 2);
    }

    #[test]
    fn test_thumbnail_ready_updates_selected() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.detail_ready("本文".into());
        state.thumbnail_ready("data:image/png;base64,AAAA".into());
        assert!(state.selected_idea().unwrap().thumbnail_ref.is_some());
    }

    #[test]
    fn test_delete_idea_clears_selection() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.detail_ready("本文".into());
        state.delete_idea(id);
        assert_eq!(state.ideas.len(), 1);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_delete_last_idea_returns_to_input() {
        let (mut state, id) = state_with_ideas();
        let other = state.ideas[1].id;
        state.delete_idea(id);
        state.delete_idea(other);
        assert_eq!(state.step, CreatorStep::Input);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.reset();
        assert_eq!(state.step, CreatorStep::Input);
        assert!(state.ideas.is_empty());
        assert!(state.raw_text.is_empty());
    }

    #[test]
    fn test_restore_with_ideas_jumps_to_ideas() {
        let mut state = CreatorState::default();
        state.restore("以前の入力".into(), vec![idea("saved")]);
        assert_eq!(state.step, CreatorStep::Ideas);
        assert_eq!(state.raw_text, "以前の入力");
    }

    #[test]
    fn test_restore_empty_stays_at_input() {
        let mut state = CreatorState::default();
        state.restore(String::new(), Vec::new());
        assert_eq!(state.step, CreatorStep::Input);
    }

    #[test]
    fn test_reselect_from_detail_step() {
        let (mut state, id) = state_with_ideas();
        state.begin_detail(id);
        state.detail_ready("本文".into());
        let other = state.ideas[1].id;
        assert!(state.begin_detail(other));
        assert_eq!(state.step, CreatorStep::GeneratingDetail);
    }
}
