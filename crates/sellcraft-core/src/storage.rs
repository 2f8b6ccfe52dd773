//! Snapshot store trait and the quota-degrade write policy.
//!
//! The creator wizard persists its idea list and raw input so a reload
//! can resume at the Ideas step. Persistence is best-effort: a failed
//! write degrades the payload, retries once, and finally clears the slot
//! -- the user-facing operation never fails because of storage.

use sellcraft_types::error::SnapshotError;
use sellcraft_types::idea::SkillIdea;

use std::fmt;

/// Named slots the creator wizard persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSlot {
    /// Serialized idea list (JSON array of `SkillIdea`).
    Ideas,
    /// Raw seller input text.
    RawInput,
}

impl SnapshotSlot {
    /// Stable key used by store implementations.
    pub fn key(self) -> &'static str {
        match self {
            SnapshotSlot::Ideas => "ideas",
            SnapshotSlot::RawInput => "raw_input",
        }
    }
}

impl fmt::Display for SnapshotSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Trait for snapshot persistence.
///
/// Implementations live in sellcraft-infra (e.g., `SqliteSnapshotStore`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait
/// macro).
pub trait SnapshotStore: Send + Sync {
    /// Write a slot, replacing any previous value.
    fn put(
        &self,
        slot: SnapshotSlot,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), SnapshotError>> + Send;

    /// Read a slot. `None` when the slot is absent or cleared.
    fn get(
        &self,
        slot: SnapshotSlot,
    ) -> impl std::future::Future<Output = Result<Option<String>, SnapshotError>> + Send;

    /// Clear a slot.
    fn clear(
        &self,
        slot: SnapshotSlot,
    ) -> impl std::future::Future<Output = Result<(), SnapshotError>> + Send;
}

/// Persist the idea list with the degrade-then-clear policy.
///
/// 1. Try the full payload.
/// 2. On quota failure, strip thumbnail references and retry once.
/// 3. On a second failure, clear the slot so no stale state survives.
///
/// Never returns an error: every failure path is logged and absorbed.
pub async fn save_ideas_degrading<S: SnapshotStore>(store: &S, ideas: &[SkillIdea]) {
    let full = match serde_json::to_string(ideas) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "idea snapshot serialization failed");
            return;
        }
    };

    match store.put(SnapshotSlot::Ideas, &full).await {
        Ok(()) => return,
        Err(err) => {
            tracing::warn!(error = %err, "idea snapshot write failed, retrying without thumbnails");
        }
    }

    let slim: Vec<SkillIdea> = ideas.iter().map(SkillIdea::without_thumbnail).collect();
    let slim_json = match serde_json::to_string(&slim) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "degraded snapshot serialization failed");
            return;
        }
    };

    if let Err(err) = store.put(SnapshotSlot::Ideas, &slim_json).await {
        tracing::error!(error = %err, "degraded snapshot write failed, clearing slot");
        if let Err(err) = store.clear(SnapshotSlot::Ideas).await {
            tracing::error!(error = %err, "snapshot slot clear failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellcraft_types::idea::{IdeaKind, SkillIdeaDraft};
    use std::sync::Mutex;

    /// Store that fails the first `fail_puts` writes with a quota error.
    struct FlakyStore {
        fail_puts: Mutex<usize>,
        puts: Mutex<Vec<String>>,
        cleared: Mutex<bool>,
    }

    impl FlakyStore {
        fn failing(n: usize) -> Self {
            Self {
                fail_puts: Mutex::new(n),
                puts: Mutex::new(Vec::new()),
                cleared: Mutex::new(false),
            }
        }
    }

    impl SnapshotStore for FlakyStore {
        async fn put(&self, _slot: SnapshotSlot, value: &str) -> Result<(), SnapshotError> {
            let mut remaining = self.fail_puts.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(SnapshotError::QuotaExceeded);
            }
            self.puts.lock().unwrap().push(value.to_string());
            Ok(())
        }

        async fn get(&self, _slot: SnapshotSlot) -> Result<Option<String>, SnapshotError> {
            Ok(self.puts.lock().unwrap().last().cloned())
        }

        async fn clear(&self, _slot: SnapshotSlot) -> Result<(), SnapshotError> {
            *self.cleared.lock().unwrap() = true;
            Ok(())
        }
    }

    fn ideas_with_thumbnail() -> Vec<SkillIdea> {
        let mut idea = SkillIdea::from_draft(SkillIdeaDraft {
            title: "t".into(),
            strength: "s".into(),
            solution: "x".into(),
            kind: IdeaKind::Standard,
        });
        idea.thumbnail_ref = Some("data:image/png;base64,AAAA".into());
        vec![idea]
    }

    #[tokio::test]
    async fn test_happy_path_writes_full_payload() {
        let store = FlakyStore::failing(0);
        save_ideas_degrading(&store, &ideas_with_thumbnail()).await;
        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert!(puts[0].contains("thumbnail_ref"));
    }

    #[tokio::test]
    async fn test_quota_failure_degrades_then_succeeds() {
        let store = FlakyStore::failing(1);
        save_ideas_degrading(&store, &ideas_with_thumbnail()).await;
        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert!(!puts[0].contains("thumbnail_ref"));
        assert!(!*store.cleared.lock().unwrap());
    }

    #[tokio::test]
    async fn test_double_failure_clears_slot() {
        let store = FlakyStore::failing(2);
        save_ideas_degrading(&store, &ideas_with_thumbnail()).await;
        assert!(store.puts.lock().unwrap().is_empty());
        assert!(*store.cleared.lock().unwrap());
    }

    #[test]
    fn test_slot_keys() {
        assert_eq!(SnapshotSlot::Ideas.key(), "ideas");
        assert_eq!(SnapshotSlot::RawInput.key(), "raw_input");
    }
}
