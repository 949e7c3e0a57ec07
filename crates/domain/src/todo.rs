//! Todo — the single persisted record: a title and a completion flag.

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, ValidationError};
use crate::id::TodoId;

/// A persisted todo record.
///
/// `id` is assigned by storage on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Content of a todo without an identifier.
///
/// Used both for creation and for wholesale replacement on update: every
/// field is always supplied, there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub completed: bool,
}

impl TodoDraft {
    /// Create a builder for constructing a [`TodoDraft`].
    #[must_use]
    pub fn builder() -> TodoDraftBuilder {
        TodoDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), TodoError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }

    /// Attach a storage-assigned identifier, producing the persisted shape.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
        }
    }
}

/// Step-by-step builder for [`TodoDraft`].
#[derive(Debug, Default)]
pub struct TodoDraftBuilder {
    title: Option<String>,
    completed: Option<bool>,
}

impl TodoDraftBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Consume the builder, validate, and return a [`TodoDraft`].
    ///
    /// `completed` defaults to `false` when not set.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] if `title` is missing or empty.
    pub fn build(self) -> Result<TodoDraft, TodoError> {
        let draft = TodoDraft {
            title: self.title.unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
        };
        draft.validate()?;
        Ok(draft)
    }
}
