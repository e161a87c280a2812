//! Domain models with validation at construction
//!
//! Drafts bound from request bodies are validated into `NewPost` before they
//! reach the store. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod post;

pub use validation::ValidationError;
pub use post::{NewPost, Post, PostDraft, PostId};
