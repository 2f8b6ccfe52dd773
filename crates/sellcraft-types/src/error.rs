use thiserror::Error;

/// Errors from decoding a model response into domain structures.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed response payload: {0}")]
    Malformed(String),

    #[error("response payload was empty")]
    Empty,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

/// Errors from snapshot-store operations (used by trait definitions in
/// sellcraft-core).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("snapshot slot not found")]
    NotFound,

    #[error("storage quota exceeded")]
    QuotaExceeded,
}
