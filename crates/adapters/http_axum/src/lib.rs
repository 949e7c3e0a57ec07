//! # quicktodo-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** over todo records (`/todos`, `/todos/{id}`)
//! - Serve a root banner (`/`) and a liveness probe (`/health`)
//! - Allow cross-origin access from any origin, since the browser client
//!   is served from a different host/port
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `quicktodo-app` (for port traits and services) and `quicktodo-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
