//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TodoError`]
//! via `From`. Adapters box their source error into [`TodoError::Storage`].

/// Top-level error returned by application services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A domain invariant was violated by the caller's input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed (connection, IO, decoding).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is missing or empty.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A path identifier could not be parsed as an integer id.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// A lookup referenced an identifier absent from storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, formatted for display.
    pub id: String,
}
