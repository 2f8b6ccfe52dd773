//! SQLite storage backend.

pub mod pool;
pub mod snapshot;

pub use pool::{default_database_url, DatabasePool};
pub use snapshot::SqliteSnapshotStore;
