//! Application Layer
//!
//! Use cases over the user store.

pub mod config;
pub mod create_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

// Re-exports
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserOutput, CreateUserUseCase};
pub use get_user::GetUserUseCase;
pub use list_users::{ListUsersInput, ListUsersUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
