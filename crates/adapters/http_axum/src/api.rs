//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod todos;

use axum::Router;
use axum::routing::{get, put};

use quicktodo_app::ports::TodoRepository;

use crate::state::AppState;

/// Build the `/todos` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/todos", get(todos::list::<R>).post(todos::create::<R>))
        .route(
            "/todos/{id}",
            put(todos::update::<R>)
                .get(todos::get::<R>)
                .delete(todos::delete::<R>),
        )
}
