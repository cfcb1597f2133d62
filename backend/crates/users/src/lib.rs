//! Users (User Directory) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, partial-update shape, repository trait
//! - `application/` - Use cases (list, get, create, update)
//! - `infra/` - In-memory store and seed data
//! - `presentation/` - HTTP handlers, DTOs, boundary validation, router
//!
//! ## Consistency Model
//! - The store lives in process memory and resets to the seed users on start
//! - Reads share a lock; create and update hold the write lock for the whole
//!   check-then-write, so a username can never be inserted twice
//! - Request bodies, queries and path values are checked before any use case runs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::router::users_router;
