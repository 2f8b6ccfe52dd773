//! SQLite-backed snapshot store.
//!
//! Implements the `SnapshotStore` trait from sellcraft-core over a
//! single `snapshots` table: one row per slot, upserted on write. Large
//! payloads (idea lists with embedded thumbnails) are written as-is; the
//! degrade policy in core decides what to do when a write fails.

use sellcraft_core::storage::{SnapshotSlot, SnapshotStore};
use sellcraft_types::error::SnapshotError;

use super::pool::DatabasePool;

/// SQLite implementation of [`SnapshotStore`].
#[derive(Clone)]
pub struct SqliteSnapshotStore {
    pool: DatabasePool,
}

impl SqliteSnapshotStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Map an sqlx error to the snapshot error taxonomy.
///
/// A full database surfaces as a quota failure so the degrade policy in
/// core can strip thumbnails and retry.
fn map_sqlx_error(err: sqlx::Error) -> SnapshotError {
    match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            SnapshotError::Connection
        }
        sqlx::Error::Database(db_err) if db_err.message().contains("full") => {
            SnapshotError::QuotaExceeded
        }
        _ => SnapshotError::Query(err.to_string()),
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    async fn put(&self, slot: SnapshotSlot, value: &str) -> Result<(), SnapshotError> {
        sqlx::query(
            "INSERT INTO snapshots (slot, value, updated_at) VALUES (?, ?, datetime('now'))
             ON CONFLICT(slot) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(slot.key())
        .bind(value)
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get(&self, slot: SnapshotSlot) -> Result<Option<String>, SnapshotError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM snapshots WHERE slot = ?")
                .bind(slot.key())
                .fetch_optional(&self.pool.reader)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(|(value,)| value))
    }

    async fn clear(&self, slot: SnapshotSlot) -> Result<(), SnapshotError> {
        sqlx::query("DELETE FROM snapshots WHERE slot = ?")
            .bind(slot.key())
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (tempfile::TempDir, SqliteSnapshotStore) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("snap.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteSnapshotStore::new(pool))
    }

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let (_dir, store) = test_store().await;

        store.put(SnapshotSlot::RawInput, "売れる文章").await.unwrap();
        let value = store.get(SnapshotSlot::RawInput).await.unwrap();
        assert_eq!(value.as_deref(), Some("売れる文章"));
    }

    #[tokio::test]
    async fn test_put_replaces_previous_value() {
        let (_dir, store) = test_store().await;

        store.put(SnapshotSlot::Ideas, "[1]").await.unwrap();
        store.put(SnapshotSlot::Ideas, "[1,2]").await.unwrap();
        let value = store.get(SnapshotSlot::Ideas).await.unwrap();
        assert_eq!(value.as_deref(), Some("[1,2]"));
    }

    #[tokio::test]
    async fn test_get_missing_slot_is_none() {
        let (_dir, store) = test_store().await;
        assert!(store.get(SnapshotSlot::Ideas).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_removes_slot() {
        let (_dir, store) = test_store().await;

        store.put(SnapshotSlot::Ideas, "[]").await.unwrap();
        store.clear(SnapshotSlot::Ideas).await.unwrap();
        assert!(store.get(SnapshotSlot::Ideas).await.unwrap().is_none());

        // Clearing an absent slot is a no-op, not an error.
        store.clear(SnapshotSlot::Ideas).await.unwrap();
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let (_dir, store) = test_store().await;

        store.put(SnapshotSlot::Ideas, "[]").await.unwrap();
        store.put(SnapshotSlot::RawInput, "入力").await.unwrap();
        store.clear(SnapshotSlot::Ideas).await.unwrap();

        assert!(store.get(SnapshotSlot::Ideas).await.unwrap().is_none());
        assert_eq!(
            store.get(SnapshotSlot::RawInput).await.unwrap().as_deref(),
            Some("入力")
        );
    }
}
