use thiserror::Error;

/// Errors surfaced by repository operations.
///
/// Backend failures propagate here with their original message; no richer
/// taxonomy is layered on top. A missing record is not an error: `find` and
/// `update` return `None` and `delete` is an idempotent no-op.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
