//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use quicktodo_app::ports::TodoRepository;

use crate::api::todos::MessageBody;
use crate::state::AppState;

/// Greeting returned by `GET /`.
pub const BANNER: &str = "To-Do backend running successfully!";

/// Build the top-level axum [`Router`].
///
/// Merges the todo routes with the root banner and health probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a [`CorsLayer`] open to
/// every origin, method and header.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: BANNER.to_string(),
    })
}

async fn health_check() -> &'static str {
    "OK"
}
