//! Storage port — repository trait for todo persistence.

use std::future::Future;

use quicktodo_domain::error::TodoError;
use quicktodo_domain::id::TodoId;
use quicktodo_domain::todo::{Todo, TodoDraft};

/// Repository for persisting and querying [`Todo`]s.
///
/// Every method maps to exactly one statement against the backing store.
/// Methods addressing a single record return `None` when the id is absent
/// rather than an error; the service layer decides what "missing" means.
pub trait TodoRepository {
    /// Persist a new record, letting storage assign its identifier.
    fn create(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, TodoError>> + Send;

    /// Get a record by its identifier.
    fn get_by_id(&self, id: TodoId)
    -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;

    /// Get every record, in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send;

    /// Replace `title` and `completed` of an existing record.
    ///
    /// Returns `None` without creating anything when `id` is absent.
    fn update(
        &self,
        id: TodoId,
        draft: TodoDraft,
    ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;

    /// Permanently remove a record, returning what was removed.
    fn delete(&self, id: TodoId)
    -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;
}
