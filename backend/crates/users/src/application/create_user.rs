//! Create User Use Case
//!
//! Adds a new entry to the directory.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// Create user input
pub struct CreateUserInput {
    pub username: String,
    pub date_joined: String,
    pub location: String,
    pub age: i64,
}

/// Create user output
pub struct CreateUserOutput {
    pub username: String,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<CreateUserOutput> {
        let user = User::new(input.username, input.date_joined, input.location, input.age);
        let username = user.username.clone();

        // Conflict is detected inside the repository under the write lock
        let store_size = self.user_repo.create(user).await?;

        tracing::info!(username = %username, store_size, "User created");

        Ok(CreateUserOutput { username })
    }
}
