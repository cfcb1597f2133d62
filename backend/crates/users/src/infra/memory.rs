//! In-Memory Repository Implementation

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::infra::seed::seed_users;

/// Process-local user store keyed by username.
///
/// Iteration follows insertion order. Cloning shares the underlying map.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<IndexMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Store pre-populated with the seed users
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Store pre-populated with `users`; later duplicates overwrite earlier ones
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect::<IndexMap<_, _>>();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for InMemoryUserRepository {
    async fn list(&self, limit: usize) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().take(limit).cloned().collect())
    }

    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn create(&self, user: User) -> UserResult<usize> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.username) {
            return Err(UserError::UserAlreadyExists);
        }

        users.insert(user.username.clone(), user);
        Ok(users.len())
    }

    async fn update(&self, username: &str, patch: UserPatch) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        Ok(users.get_mut(username).map(|user| {
            user.apply(patch);
            user.clone()
        }))
    }
}
