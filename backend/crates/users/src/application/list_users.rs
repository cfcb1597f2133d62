//! List Users Use Case

use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// List users input
#[derive(Debug, Clone, Default)]
pub struct ListUsersInput {
    /// Already validated as non-negative; `None` means the configured default
    pub limit: Option<usize>,
}

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: ListUsersInput) -> UserResult<Vec<User>> {
        let limit = input.limit.unwrap_or(self.config.default_list_limit);
        let users = self.user_repo.list(limit).await?;

        tracing::debug!(limit, returned = users.len(), "Listed users");

        Ok(users)
    }
}
