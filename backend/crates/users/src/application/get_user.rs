//! Get User Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Get user use case
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, username: &str) -> UserResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or(UserError::UserNotFound)
    }
}
