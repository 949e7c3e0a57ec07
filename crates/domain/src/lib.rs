//! # quicktodo-domain
//!
//! Pure domain model for the quicktodo record service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`TodoId`](id::TodoId), error conventions
//! - Define the **Todo** record (title + completion flag + identifier)
//! - Define the **draft** shape accepted for creation and wholesale replacement
//! - Contain all invariant enforcement (non-empty titles)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod todo;
