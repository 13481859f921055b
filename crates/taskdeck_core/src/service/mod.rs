//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep callers decoupled from persistence details.

pub mod todo_service;
pub mod user_service;

pub use todo_service::TodoService;
pub use user_service::UserService;
