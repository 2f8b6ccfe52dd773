use serde::{Deserialize, Serialize};

/// Render-ready view of a generated listing, split into the fields the
/// marketplace form expects.
///
/// This is a derived view over the raw listing text: it is recomputed from
/// the stored text on every render and never persisted itself. Fields for
/// sections the extractor could not find are empty strings, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSections {
    pub category: String,
    pub sub_category: String,
    pub title: String,
    pub catchphrase: String,
    /// Main service description body.
    pub detail: String,
    /// Cancellation policy block.
    pub policy: String,
    /// Seller skills block.
    pub skills: String,
    /// Purchase request template block.
    pub template: String,
}

impl ListingSections {
    /// True when the extractor found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.sub_category.is_empty()
            && self.title.is_empty()
            && self.catchphrase.is_empty()
            && self.detail.is_empty()
            && self.policy.is_empty()
            && self.skills.is_empty()
            && self.template.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ListingSections::default().is_empty());
    }

    #[test]
    fn test_non_empty_detection() {
        let sections = ListingSections {
            title: "動画編集サービス".into(),
            ..Default::default()
        };
        assert!(!sections.is_empty());
    }
}
