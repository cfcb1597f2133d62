//! Update User Use Case
//!
//! Partial merge of the provided fields into an existing record.

use std::sync::Arc;

use crate::domain::entity::user::{User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Update user input
pub struct UpdateUserInput {
    pub username: String,
    pub patch: UserPatch,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> UserResult<User> {
        let noop = input.patch.is_empty();

        let user = self
            .user_repo
            .update(&input.username, input.patch)
            .await?
            .ok_or(UserError::UserNotFound)?;

        tracing::info!(username = %user.username, noop, "User updated");

        Ok(user)
    }
}
