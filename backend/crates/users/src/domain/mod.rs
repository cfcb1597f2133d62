//! Domain Layer
//!
//! Contains the user entity, its partial-update shape, and the
//! repository trait.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::user::{User, UserPatch};
pub use repository::UserRepository;
