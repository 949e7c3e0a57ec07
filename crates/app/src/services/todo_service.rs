//! Todo service — use-cases for managing todo records.

use quicktodo_domain::error::{NotFoundError, TodoError};
use quicktodo_domain::id::TodoId;
use quicktodo_domain::todo::{Todo, TodoDraft};

use crate::ports::TodoRepository;

fn not_found(id: TodoId) -> TodoError {
    NotFoundError {
        entity: "Todo",
        id: id.to_string(),
    }
    .into()
}

/// Application service for todo CRUD operations.
pub struct TodoService<R> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new todo after validating domain invariants.
    ///
    /// Identical drafts submitted twice produce two distinct records.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_todo(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        draft.validate()?;
        let todo = self.repo.create(draft).await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    /// Look up a todo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no todo with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all todos.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repo.get_all().await
    }

    /// Replace the title and completion flag of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] if invariants fail,
    /// [`TodoError::NotFound`] when `id` is absent (nothing is created),
    /// or a storage error from the repository.
    pub async fn update_todo(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, TodoError> {
        draft.validate()?;
        let todo = self
            .repo
            .update(id, draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, completed = todo.completed, "todo updated");
        Ok(todo)
    }

    /// Delete a todo by id, returning the record that was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when `id` is absent, or a storage
    /// error from the repository.
    pub async fn delete_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, "todo deleted");
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quicktodo_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryTodoRepo {
        store: Mutex<(i64, BTreeMap<TodoId, Todo>)>,
    }

    impl TodoRepository for InMemoryTodoRepo {
        fn create(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, TodoError>> + Send {
            let mut guard = self.store.lock().unwrap();
            guard.0 += 1;
            let todo = draft.into_todo(TodoId::new(guard.0));
            guard.1.insert(todo.id, todo.clone());
            async { Ok(todo) }
        }

        fn get_by_id(
            &self,
            id: TodoId,
        ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
            let result = self.store.lock().unwrap().1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send {
            let result: Vec<Todo> = self.store.lock().unwrap().1.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: TodoId,
            draft: TodoDraft,
        ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let result = guard.1.get_mut(&id).map(|existing| {
                *existing = draft.into_todo(id);
                existing.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: TodoId,
        ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
            let result = self.store.lock().unwrap().1.remove(&id);
            async { Ok(result) }
        }
    }

    fn make_service() -> TodoService<InMemoryTodoRepo> {
        TodoService::new(InMemoryTodoRepo::default())
    }

    fn draft(title: &str, completed: bool) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn should_create_todo_and_fetch_it_back() {
        let svc = make_service();

        let created = svc.create_todo(draft("Buy milk", true)).await.unwrap();
        let fetched = svc.get_todo(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Buy milk");
        assert!(fetched.completed);
    }

    #[tokio::test]
    async fn should_reject_create_when_title_is_empty() {
        let svc = make_service();

        let result = svc.create_todo(draft("", false)).await;

        assert!(matches!(
            result,
            Err(TodoError::Validation(ValidationError::EmptyTitle))
        ));
        assert!(svc.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_when_same_draft_created_twice() {
        let svc = make_service();

        let a = svc.create_todo(draft("Same", false)).await.unwrap();
        let b = svc.create_todo(draft("Same", false)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(svc.list_todos().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_todo_missing() {
        let svc = make_service();
        let result = svc.get_todo(TodoId::new(999)).await;
        assert!(matches!(result, Err(TodoError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_fields_when_updating() {
        let svc = make_service();
        let created = svc.create_todo(draft("Buy milk", false)).await.unwrap();

        let updated = svc
            .update_todo(created.id, draft("Buy oat milk", true))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn should_reach_same_state_when_update_applied_twice() {
        let svc = make_service();
        let created = svc.create_todo(draft("Buy milk", false)).await.unwrap();

        let first = svc
            .update_todo(created.id, draft("Buy milk", true))
            .await
            .unwrap();
        let second = svc
            .update_todo(created.id, draft("Buy milk", true))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(svc.list_todos().await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn should_not_create_record_when_updating_missing_id() {
        let svc = make_service();

        let result = svc.update_todo(TodoId::new(5), draft("Ghost", true)).await;

        assert!(matches!(result, Err(TodoError::NotFound(_))));
        assert!(svc.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_update_when_title_is_empty() {
        let svc = make_service();
        let created = svc.create_todo(draft("Buy milk", false)).await.unwrap();

        let result = svc.update_todo(created.id, draft("", true)).await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert_eq!(svc.get_todo(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_return_removed_todo_when_deleting() {
        let svc = make_service();
        let created = svc.create_todo(draft("Buy milk", false)).await.unwrap();

        let removed = svc.delete_todo(created.id).await.unwrap();

        assert_eq!(removed, created);
        let result = svc.get_todo(created.id).await;
        assert!(matches!(result, Err(TodoError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_id() {
        let svc = make_service();
        let result = svc.delete_todo(TodoId::new(999)).await;
        assert!(matches!(result, Err(TodoError::NotFound(_))));
    }
}
