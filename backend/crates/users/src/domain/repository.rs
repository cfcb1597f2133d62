//! Repository Traits
//!
//! Interface for the user store. Implementation is in infrastructure layer.

use crate::domain::entity::user::{User, UserPatch};
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// First `limit` users in insertion order
    async fn list(&self, limit: usize) -> UserResult<Vec<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Insert a new user and return the store size after the insert.
    ///
    /// Fails with `UserAlreadyExists` if the username is taken; the
    /// existence check and the insert are atomic.
    async fn create(&self, user: User) -> UserResult<usize>;

    /// Merge `patch` into an existing user and return the result.
    ///
    /// Returns `None` if no such user exists.
    async fn update(&self, username: &str, patch: UserPatch) -> UserResult<Option<User>>;
}
